use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use crossterm::style::{Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use snake_engine::{Direction, Frame, GamePhase, GameView, InputSource, PlayerIntent, RecordPlayer};

use crate::render;

/// Raw mode and alternate screen for the duration of a game or replay;
/// restores the terminal when dropped, including on early exits.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    Live,
    Replay,
}

/// Draws full frames with score and key-hint lines below the field.
pub struct GameScreen {
    stdout: Stdout,
    mode: ScreenMode,
    config_path: String,
    map_path: String,
}

impl GameScreen {
    pub fn new(mode: ScreenMode, config_path: String, map_path: String) -> Self {
        Self {
            stdout: io::stdout(),
            mode,
            config_path,
            map_path,
        }
    }

    pub fn draw(&mut self, frame: &Frame, phase: GamePhase) -> io::Result<()> {
        let game_over = phase == GamePhase::Over;

        queue!(self.stdout, Clear(ClearType::All))?;
        for (y, row) in frame.rows.iter().enumerate() {
            queue!(self.stdout, MoveTo(0, y as u16))?;
            for &cell in row {
                let token = render::token_for(cell, game_over);
                match token.bg {
                    Some(bg) => queue!(
                        self.stdout,
                        SetBackgroundColor(bg),
                        Print(token.ch),
                        ResetColor
                    )?,
                    None => queue!(self.stdout, Print(token.ch))?,
                }
            }
        }

        let status_row = frame.rows.len() as u16;
        let score_line = if game_over {
            format!("Game over! Your score is {}", frame.score)
        } else {
            format!("Current score: {}", frame.score)
        };
        queue!(self.stdout, MoveTo(0, status_row), Print(score_line))?;
        queue!(
            self.stdout,
            MoveTo(0, status_row + 1),
            Print(format!("Config: {}", self.config_path))
        )?;
        queue!(
            self.stdout,
            MoveTo(0, status_row + 2),
            Print(format!("Map: {}", self.map_path))
        )?;
        let hint = self.hint(phase);
        queue!(
            self.stdout,
            MoveTo(0, status_row + 3),
            Print(hint)
        )?;

        self.stdout.flush()
    }

    fn hint(&self, phase: GamePhase) -> &'static str {
        match (self.mode, phase) {
            (ScreenMode::Live, GamePhase::Running) => {
                "Space to pause, w/a/s/d or the arrow keys to move."
            }
            (ScreenMode::Live, GamePhase::Paused) => "Space to resume, q to quit.",
            (ScreenMode::Live, GamePhase::Over) => "Press any key to continue.",
            (ScreenMode::Replay, GamePhase::Over) => "Replay finished. Press any key to continue.",
            (ScreenMode::Replay, _) => "q to stop the replay.",
        }
    }
}

impl GameView for GameScreen {
    fn present(&mut self, frame: &Frame, phase: GamePhase) {
        if let Err(e) = self.draw(frame, phase) {
            snake_engine::log!("failed to draw frame: {}", e);
        }
    }
}

/// Maps raw key events to player intents. Tracks the pause state itself so
/// that space toggles and `q` only quits while paused.
pub struct KeyInput {
    paused: bool,
}

impl KeyInput {
    pub fn new() -> Self {
        Self { paused: false }
    }

    fn map_key(&mut self, key: KeyEvent) -> Option<PlayerIntent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(PlayerIntent::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(PlayerIntent::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(PlayerIntent::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(PlayerIntent::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(PlayerIntent::Turn(Direction::Right)),
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                if self.paused {
                    Some(PlayerIntent::Pause)
                } else {
                    Some(PlayerIntent::Resume)
                }
            }
            KeyCode::Char('q') if self.paused => Some(PlayerIntent::Quit),
            _ => None,
        }
    }
}

impl Default for KeyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyInput {
    fn poll(&mut self, timeout: Duration) -> Option<PlayerIntent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match poll(remaining) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = read()
                        && key.kind == KeyEventKind::Press
                        && let Some(intent) = self.map_key(key)
                    {
                        return Some(intent);
                    }
                }
                _ => return None,
            }
            if Instant::now() >= deadline {
                return None;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayOutcome {
    Completed,
    Interrupted,
}

/// Plays a loaded record at its recorded cadence. `q` (or Ctrl+C) between
/// frames stops the playback; nothing further is drawn after that.
pub fn play_record(player: &mut RecordPlayer, screen: &mut GameScreen) -> io::Result<ReplayOutcome> {
    let total = player.total_frames();
    let interval = player.frame_interval();
    player.reset();

    let mut shown = 0;
    while let Some(frame) = player.next_frame() {
        shown += 1;
        let phase = if shown == total {
            GamePhase::Over
        } else {
            GamePhase::Running
        };
        screen.draw(frame, phase)?;

        if shown < total && wait_cancelled(interval)? {
            return Ok(ReplayOutcome::Interrupted);
        }
    }

    wait_any_key()?;
    Ok(ReplayOutcome::Completed)
}

// Sleeps for `duration`, watching for a cancel key.
fn wait_cancelled(duration: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + duration;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if poll(remaining)?
            && let Event::Key(key) = read()?
            && key.kind == KeyEventKind::Press
        {
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Char('q') || ctrl_c {
                return Ok(true);
            }
        }
    }
}

pub fn wait_any_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
