use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use minesweeper_alpha_core::{BoardView, CommandOutcome, GameEngine};

use crate::banner::Banners;

const PROMPT: &str = "minesweeper-alpha: ";

const HELP: &str = "\
Commands Available...
 - Reveal: r/reveal row col
 -   Mark: m/mark   row col
 -  Guess: g/guess  row col
 -   Help: h/help
 -   Quit: q/quit";

/// Terminal streams of one interactive session.
pub struct Terminal<R, W, E> {
    pub input: R,
    pub output: W,
    pub errors: E,
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    /// Runs the render, read, apply loop until the game reaches a terminal outcome.
    ///
    /// Closed input counts as quitting.
    pub fn play(&mut self, engine: &mut GameEngine, banners: &Banners) -> Result<CommandOutcome> {
        writeln!(self.output, "{}", banners.welcome.trim_end())?;
        writeln!(self.output)?;

        loop {
            self.prompt(engine)?;

            let Some(line) = self.read_line()? else {
                log::info!("input closed, leaving the game");
                self.say_goodbye()?;
                return Ok(CommandOutcome::Quit);
            };

            match engine.step(&line) {
                Ok(CommandOutcome::Continue) => {}
                Ok(CommandOutcome::Help) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", HELP)?;
                }
                Ok(outcome @ CommandOutcome::Won { score }) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", banners.game_won_with_score(score))?;
                    writeln!(self.output)?;
                    return Ok(outcome);
                }
                Ok(outcome @ CommandOutcome::Lost) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", banners.game_over.trim_end())?;
                    writeln!(self.output)?;
                    return Ok(outcome);
                }
                Ok(outcome @ CommandOutcome::Quit) => {
                    self.say_goodbye()?;
                    return Ok(outcome);
                }
                Err(err) => {
                    log::debug!("rejected {:?}: {:?}", line.trim_end(), err);
                    writeln!(self.errors)?;
                    writeln!(self.errors, "{}", err)?;
                }
            }
        }
    }

    fn prompt(&mut self, engine: &mut GameEngine) -> Result<()> {
        let reveal_mines = engine.take_fog_off();

        writeln!(self.output)?;
        writeln!(self.output, " Rounds Completed: {}", engine.round())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", BoardView::new(engine.board(), reveal_mines))?;
        writeln!(self.output)?;
        write!(self.output, "{}", PROMPT)?;
        self.output.flush().context("flushing prompt")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading command from input")?;
        Ok((read > 0).then_some(line))
    }

    fn say_goodbye(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Quitting the game...")?;
        writeln!(self.output, "Bye!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use minesweeper_alpha_core::{EngineState, load_board};

    use super::*;

    struct Session {
        outcome: CommandOutcome,
        engine: GameEngine,
        output: String,
        errors: String,
    }

    fn run(seed: &str, input: &str) -> Session {
        let mut engine = GameEngine::new(load_board(seed).unwrap());
        let banners = Banners {
            game_won: "WON\nSCORE:".into(),
            game_over: "LOST".into(),
            ..Banners::default()
        };
        let mut terminal = Terminal {
            input: Cursor::new(input.to_owned()),
            output: Vec::new(),
            errors: Vec::new(),
        };

        let outcome = terminal.play(&mut engine, &banners).unwrap();

        Session {
            outcome,
            engine,
            output: String::from_utf8(terminal.output).unwrap(),
            errors: String::from_utf8(terminal.errors).unwrap(),
        }
    }

    fn winning_moves() -> String {
        let mut input = String::new();
        for row in 0..5 {
            for col in 0..5 {
                if (row, col) != (0, 0) {
                    input.push_str(&format!("r {row} {col}\n"));
                }
            }
        }
        input.push_str("m 0 0\n");
        input
    }

    #[test]
    fn prompt_shows_rounds_grid_and_prompt() {
        let session = run("5 5 1 0 0", "r 1 1\nq\n");

        assert!(session.output.contains(" Rounds Completed: 0\n\n 0 |   |"));
        assert!(session.output.contains(" Rounds Completed: 1\n"));
        assert!(session.output.contains(" 1 |   | 1 |   |   |   |\n"));
        assert!(session.output.contains("     0   1   2   3   4  \n\nminesweeper-alpha: "));
        assert!(session.output.ends_with("Quitting the game...\nBye!\n"));
        assert_eq!(session.outcome, CommandOutcome::Quit);
    }

    #[test]
    fn win_prints_banner_with_score() {
        let session = run("5 5 1 0 0", &winning_moves());

        assert_eq!(session.outcome, CommandOutcome::Won { score: 100.0 });
        assert!(session.output.ends_with("WON\nSCORE: 100.00\n\n"));
        assert_eq!(session.engine.state(), EngineState::Won);
    }

    #[test]
    fn losing_prints_game_over_and_stops_reading() {
        let session = run("5 5 1 2 2", "r 2 2\nr 0 0\n");

        assert_eq!(session.outcome, CommandOutcome::Lost);
        assert!(session.output.ends_with("\nLOST\n\n"));
        assert_eq!(session.engine.board().tiles_revealed(), 0);
    }

    #[test]
    fn errors_go_to_error_stream_and_play_continues() {
        let session = run("5 5 1 0 0", "r 1\nr 9 9\nwhat\nr 1 2 3\nq\n");

        assert_eq!(session.engine.round(), 0);
        assert!(session.errors.contains("Invalid Command: command not recognized!"));
        assert!(session.errors.contains("Input Error: command not recognized!"));
        assert!(session.errors.contains("(9, 9) is out of bounds"));
        assert_eq!(session.outcome, CommandOutcome::Quit);
    }

    #[test]
    fn help_lists_commands_and_counts_a_round() {
        let session = run("5 5 1 0 0", "h\nq\n");

        assert!(session.output.contains("Commands Available..."));
        assert!(!session.output.contains("nofog"));
        assert_eq!(session.engine.round(), 1);
    }

    #[test]
    fn fog_off_highlights_mines_for_one_render() {
        let session = run("5 5 1 0 0", "nofog\nr 4 4\nq\n");

        assert_eq!(session.output.matches(" 0 |< >|").count(), 1);
        assert_eq!(session.engine.round(), 1);
    }

    #[test]
    fn closed_input_quits() {
        let session = run("5 5 1 0 0", "g 1 1\n");

        assert_eq!(session.outcome, CommandOutcome::Quit);
        assert!(session.output.ends_with("Bye!\n"));
        assert_eq!(session.engine.round(), 1);
    }
}
