use std::time::Duration;

use super::{Frame, RecordLog};

/// Lazy, restartable walk over a loaded record. The caller owns the pacing:
/// it draws one frame, sleeps `frame_interval`, and may stop at any point
/// between frames.
pub struct RecordPlayer {
    log: RecordLog,
    cursor: usize,
}

impl RecordPlayer {
    pub fn new(log: RecordLog) -> Self {
        Self { log, cursor: 0 }
    }

    pub fn config_path(&self) -> &str {
        &self.log.config_path
    }

    pub fn map_path(&self) -> &str {
        &self.log.map_path
    }

    /// Replay cadence matches live play for the recorded difficulty.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.log.difficulty))
    }

    pub fn total_frames(&self) -> usize {
        self.log.frames.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.log.frames.len()
    }

    /// True while the frame returned by the last `next_frame` call was the
    /// final, terminal one.
    pub fn at_terminal_frame(&self) -> bool {
        self.cursor == self.log.frames.len() && self.cursor > 0
    }

    pub fn next_frame(&mut self) -> Option<&Frame> {
        let frame = self.log.frames.get(self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn into_log(self) -> RecordLog {
        self.log
    }
}
