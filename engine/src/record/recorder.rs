use crate::game::GameState;

use super::{Frame, RecordLog};

/// Append-only frame log for one live game. Captures are snapshots; nothing
/// here ever mutates a frame after it is taken.
pub struct FrameRecorder {
    config_path: String,
    map_path: String,
    difficulty: u32,
    width: usize,
    height: usize,
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new(
        config_path: String,
        map_path: String,
        difficulty: u32,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            config_path,
            map_path,
            difficulty,
            width,
            height,
            frames: Vec::new(),
        }
    }

    pub fn capture(&mut self, state: &GameState) -> &Frame {
        let frame = Frame {
            rows: state.grid().snapshot_rows(),
            score: state.score(),
        };
        self.frames.push(frame);
        self.frames.last().expect("frame was just pushed")
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn finalize(&mut self) -> RecordLog {
        RecordLog {
            config_path: std::mem::take(&mut self.config_path),
            map_path: std::mem::take(&mut self.map_path),
            difficulty: self.difficulty,
            height: self.height,
            width: self.width,
            frames: std::mem::take(&mut self.frames),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, MapDefinition};
    use crate::game::GameRng;

    #[test]
    fn test_capture_snapshots_grid_and_score() {
        let config = GameConfig::default();
        let map = MapDefinition::default();
        let mut rng = GameRng::new(5);
        let state = GameState::new(&config, &map, &mut rng).unwrap();

        let mut recorder = FrameRecorder::new(
            "config/default.yaml".to_string(),
            "map/default.yaml".to_string(),
            config.difficulty,
            map.width,
            map.height,
        );

        let frame = recorder.capture(&state);
        assert_eq!(frame.rows.len(), map.height + 2);
        assert_eq!(frame.rows[0].len(), map.width + 2);
        assert_eq!(frame.score, 0);
        assert_eq!(recorder.frame_count(), 1);

        let log = recorder.finalize();
        assert_eq!(log.frames.len(), 1);
        assert_eq!(log.difficulty, config.difficulty);
        assert_eq!(log.config_path, "config/default.yaml");
    }
}
