use std::fmt::Write as _;
use std::path::Path;

use crate::game::Cell;

use super::{Frame, RECORD_FILE_EXTENSION, RecordLog};

#[derive(Debug)]
pub enum RecordError {
    Io(std::io::Error),
    Corrupt(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Io(e) => write!(f, "IO error: {}", e),
            RecordError::Corrupt(reason) => write!(f, "corrupt record: {}", reason),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::Io(e)
    }
}

/// The persisted record layout, line-oriented and stable for compatibility
/// with existing tooling: five header lines (config path, map path,
/// difficulty, "height width", frame count) followed by one block per frame
/// of `height + 2` rows of cell characters plus a score line.
pub fn serialize(log: &RecordLog) -> String {
    let mut out = String::new();
    out.push_str(&log.config_path);
    out.push('\n');
    out.push_str(&log.map_path);
    out.push('\n');
    let _ = writeln!(out, "{}", log.difficulty);
    let _ = writeln!(out, "{} {}", log.height, log.width);
    let _ = writeln!(out, "{}", log.frames.len());

    for frame in &log.frames {
        for row in &frame.rows {
            for &cell in row {
                out.push(cell.to_char());
            }
            out.push('\n');
        }
        let _ = writeln!(out, "{}", frame.score);
    }

    out
}

pub fn deserialize(text: &str) -> Result<RecordLog, RecordError> {
    let mut lines = text.split('\n');
    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| RecordError::Corrupt(format!("missing {}", what)))
    };

    let config_path = next_line("config path")?.to_string();
    let map_path = next_line("map path")?.to_string();

    let difficulty: u32 = next_line("difficulty")?
        .parse()
        .map_err(|_| RecordError::Corrupt("unreadable difficulty".to_string()))?;
    if !(1..=10).contains(&difficulty) {
        return Err(RecordError::Corrupt(format!(
            "difficulty {} out of range",
            difficulty
        )));
    }

    let size_line = next_line("map size")?;
    let mut size_parts = size_line.split_whitespace();
    let height: usize = size_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RecordError::Corrupt("unreadable map height".to_string()))?;
    let width: usize = size_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RecordError::Corrupt("unreadable map width".to_string()))?;
    if size_parts.next().is_some() {
        return Err(RecordError::Corrupt("malformed map size line".to_string()));
    }
    if !(8..=20).contains(&height) || !(8..=20).contains(&width) {
        return Err(RecordError::Corrupt(format!(
            "map size {}x{} out of range",
            height, width
        )));
    }

    let frame_count: usize = next_line("frame count")?
        .parse()
        .map_err(|_| RecordError::Corrupt("unreadable frame count".to_string()))?;

    let mut frames = Vec::with_capacity(frame_count);
    for frame_index in 0..frame_count {
        let mut rows = Vec::with_capacity(height + 2);
        for row_index in 0..height + 2 {
            let line = next_line("frame row")?;
            let mut row = Vec::with_capacity(width + 2);
            for c in line.chars() {
                let cell = Cell::from_char(c).ok_or_else(|| {
                    RecordError::Corrupt(format!(
                        "unknown cell character {:?} in frame {}",
                        c, frame_index
                    ))
                })?;
                row.push(cell);
            }
            if row.len() != width + 2 {
                return Err(RecordError::Corrupt(format!(
                    "frame {} row {} has {} cells, expected {}",
                    frame_index,
                    row_index,
                    row.len(),
                    width + 2
                )));
            }
            rows.push(row);
        }
        let score: u32 = next_line("score")?.parse().map_err(|_| {
            RecordError::Corrupt(format!("unreadable score in frame {}", frame_index))
        })?;
        frames.push(Frame { rows, score });
    }

    // Only the trailing newline may remain.
    match lines.next() {
        Some("") => {}
        _ => return Err(RecordError::Corrupt("missing trailing newline".to_string())),
    }
    if lines.next().is_some() {
        return Err(RecordError::Corrupt(
            "trailing data after last frame".to_string(),
        ));
    }

    Ok(RecordLog {
        config_path,
        map_path,
        difficulty,
        height,
        width,
        frames,
    })
}

pub fn save_record(path: &Path, log: &RecordLog) -> Result<(), RecordError> {
    std::fs::write(path, serialize(log))?;
    Ok(())
}

pub fn load_record(path: &Path) -> Result<RecordLog, RecordError> {
    let text = std::fs::read_to_string(path)?;
    deserialize(&text)
}

pub fn generate_record_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    format!("{}_snake.{}", timestamp, RECORD_FILE_EXTENSION)
}
