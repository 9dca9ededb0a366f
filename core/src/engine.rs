use core::num::Saturating;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Active,
    Won,
    Lost,
    Quit,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Result of applying one command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// Keep playing.
    Continue,
    /// Keep playing, after showing the command list.
    Help,
    Won { score: f64 },
    Lost,
    Quit,
}

impl CommandOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost | Self::Quit)
    }
}

/// Runs one game: owns the board, the round counter and the fog-off toggle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    round: Saturating<u32>,
    fog_off: bool,
    state: EngineState,
}

impl GameEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            round: Saturating(0),
            fog_off: false,
            state: EngineState::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> u32 {
        self.round.0
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_fog_off(&self) -> bool {
        self.fog_off
    }

    /// Consumes the fog-off request, so mines are highlighted for a single render.
    pub fn take_fog_off(&mut self) -> bool {
        let fog_off = core::mem::take(&mut self.fog_off);
        if fog_off {
            log::trace!("fog-off consumed by render");
        }
        fog_off
    }

    /// `100 * rows * cols / round`, unavailable before the first counted round.
    pub fn compute_score(&self) -> Option<f64> {
        if self.round.0 == 0 {
            return None;
        }
        let (rows, cols) = self.board.size();
        Some(100.0 * f64::from(rows) * f64::from(cols) / f64::from(self.round.0))
    }

    /// Parses and applies one input line.
    pub fn step(&mut self, line: &str) -> Result<CommandOutcome> {
        let command = parse_command(line)?;
        self.apply_command(command)
    }

    /// Applies a command and evaluates the win condition afterwards.
    ///
    /// Bounds are checked before anything is counted, so a rejected command
    /// never changes the round counter.
    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome> {
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        log::debug!("round {}: {:?}", self.round, command);

        let outcome = match command {
            Command::Reveal { row, col } => {
                let coords = self.board.validate_coords(row, col)?;
                self.round += 1;
                match self.board.reveal(coords)? {
                    RevealOutcome::HitMine => CommandOutcome::Lost,
                    RevealOutcome::Revealed { .. } => CommandOutcome::Continue,
                }
            }
            Command::Flag { row, col } => {
                let coords = self.board.validate_coords(row, col)?;
                self.round += 1;
                if !self.board.flag(coords)?.has_update() {
                    log::trace!("{:?} unchanged by flag", coords);
                }
                CommandOutcome::Continue
            }
            Command::Guess { row, col } => {
                let coords = self.board.validate_coords(row, col)?;
                self.round += 1;
                if !self.board.guess(coords)?.has_update() {
                    log::trace!("{:?} unchanged by guess", coords);
                }
                CommandOutcome::Continue
            }
            Command::Help => {
                self.round += 1;
                CommandOutcome::Help
            }
            Command::ToggleFogOff => {
                self.fog_off = true;
                CommandOutcome::Continue
            }
            Command::Quit => CommandOutcome::Quit,
        };

        Ok(self.settle(outcome))
    }

    fn settle(&mut self, outcome: CommandOutcome) -> CommandOutcome {
        let outcome = match outcome {
            CommandOutcome::Continue | CommandOutcome::Help if self.board.is_won() => {
                match self.compute_score() {
                    Some(score) => CommandOutcome::Won { score },
                    None => outcome,
                }
            }
            _ => outcome,
        };

        self.state = match outcome {
            CommandOutcome::Won { .. } => EngineState::Won,
            CommandOutcome::Lost => EngineState::Lost,
            CommandOutcome::Quit => EngineState::Quit,
            CommandOutcome::Continue | CommandOutcome::Help => EngineState::Active,
        };
        if self.state.is_finished() {
            log::debug!("game ended after {} rounds: {:?}", self.round, self.state);
        }

        outcome
    }
}
