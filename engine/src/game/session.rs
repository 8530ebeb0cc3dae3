use std::time::{Duration, Instant};

use crate::config::{GameConfig, MapDefinition};
use crate::record::{Frame, FrameRecorder, RecordLog};

use super::food::GameError;
use super::rng::GameRng;
use super::state::GameState;
use super::types::{Direction, GamePhase};

// While paused the session has no tick deadline; it just keeps asking the
// input source in short slices until a resume or quit arrives.
const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerIntent {
    Turn(Direction),
    Pause,
    Resume,
    Quit,
}

/// Supplied by the input collaborator. `poll` blocks for at most `timeout`
/// and returns the next intent, or `None` once the window elapsed without
/// one.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Option<PlayerIntent>;
}

/// Supplied by the rendering collaborator; receives every captured frame
/// plus pause/resume notifications for the current frame.
pub trait GameView {
    fn present(&mut self, frame: &Frame, phase: GamePhase);
}

/// No-op view for headless runs.
pub struct NullView;

impl GameView for NullView {
    fn present(&mut self, _frame: &Frame, _phase: GamePhase) {}
}

/// Owns the tick loop of one game: frame capture, bounded input polling and
/// the movement engine, until the state reaches `Over`.
pub struct GameSession {
    state: GameState,
    rng: GameRng,
    recorder: FrameRecorder,
    tick_interval: Duration,
}

impl GameSession {
    pub fn new(
        config: &GameConfig,
        map: &MapDefinition,
        config_path: &str,
        map_path: &str,
    ) -> Result<Self, GameError> {
        let mut rng = GameRng::from_seed_setting(config.random_seed);
        let state = GameState::new(config, map, &mut rng)?;
        let recorder = FrameRecorder::new(
            config_path.to_string(),
            map_path.to_string(),
            config.difficulty,
            map.width,
            map.height,
        );

        Ok(Self {
            state,
            rng,
            recorder,
            tick_interval: config.tick_interval(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame_count(&self) -> usize {
        self.recorder.frame_count()
    }

    /// Runs the game to completion. Every tick captures one frame before
    /// moving; the loop exits right after the terminal frame is captured,
    /// so the final grid is always part of the record.
    pub fn run<I, V>(&mut self, input: &mut I, view: &mut V) -> Result<(), GameError>
    where
        I: InputSource,
        V: GameView,
    {
        loop {
            let frame = self.recorder.capture(&self.state);
            view.present(frame, self.state.phase());
            if self.state.phase() == GamePhase::Over {
                return Ok(());
            }

            self.collect_input(input, view);
            self.state.update(&mut self.rng)?;
        }
    }

    pub fn finalize(mut self) -> RecordLog {
        self.recorder.finalize()
    }

    // Polls until the tick deadline, keeping only the latest turn request.
    // Pausing discards any turn collected so far, mirroring that no tick
    // elapses while paused.
    fn collect_input<I, V>(&mut self, input: &mut I, view: &mut V)
    where
        I: InputSource,
        V: GameView,
    {
        let deadline = Instant::now() + self.tick_interval;
        let mut latest_turn = None;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(intent) = input.poll(remaining) else {
                break;
            };

            match intent {
                PlayerIntent::Turn(direction) => latest_turn = Some(direction),
                PlayerIntent::Pause => {
                    latest_turn = None;
                    self.pause_until_resolved(input, view);
                    if self.state.phase() == GamePhase::Over {
                        return;
                    }
                    break;
                }
                PlayerIntent::Resume => {}
                PlayerIntent::Quit => {
                    self.state.quit();
                    return;
                }
            }

            if Instant::now() >= deadline {
                break;
            }
        }

        if let Some(direction) = latest_turn {
            self.state.set_direction(direction);
        }
    }

    // Suspends until resume or quit. No frames are captured and no
    // simulation time passes while paused.
    fn pause_until_resolved<I, V>(&mut self, input: &mut I, view: &mut V)
    where
        I: InputSource,
        V: GameView,
    {
        self.state.pause();
        if let Some(frame) = self.recorder.last_frame() {
            view.present(frame, GamePhase::Paused);
        }

        while self.state.phase() == GamePhase::Paused {
            match input.poll(PAUSE_POLL_INTERVAL) {
                Some(PlayerIntent::Resume) => self.state.resume(),
                Some(PlayerIntent::Quit) => self.state.quit(),
                _ => {}
            }
        }

        if self.state.phase() == GamePhase::Running
            && let Some(frame) = self.recorder.last_frame()
        {
            view.present(frame, GamePhase::Running);
        }
    }
}
