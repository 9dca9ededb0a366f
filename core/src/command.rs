use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A single player instruction, as typed at the prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal { row: i32, col: i32 },
    Flag { row: i32, col: i32 },
    Guess { row: i32, col: i32 },
    Help,
    Quit,
    ToggleFogOff,
}

enum Keyword {
    Nullary(Command),
    Cell(fn(i32, i32) -> Command),
}

fn keyword(token: &str) -> Option<Keyword> {
    use Keyword::*;

    Some(match token {
        "nofog" => Nullary(Command::ToggleFogOff),
        "help" | "h" => Nullary(Command::Help),
        "quit" | "q" => Nullary(Command::Quit),
        "reveal" | "r" => Cell(|row, col| Command::Reveal { row, col }),
        "mark" | "m" => Cell(|row, col| Command::Flag { row, col }),
        "guess" | "g" => Cell(|row, col| Command::Guess { row, col }),
        _ => return None,
    })
}

fn coordinate(token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedCoordinate)
}

/// Interprets one whitespace-delimited input line. Keywords are case-sensitive.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().ok_or(ParseError::Unrecognized)?;
    let rest = [tokens.next(), tokens.next()];
    let extra = tokens.next().is_some();

    match (keyword(first).ok_or(ParseError::Unrecognized)?, rest) {
        (Keyword::Nullary(command), [None, None]) => Ok(command),
        (Keyword::Nullary(_), _) => Err(ParseError::TooManyArguments),
        (Keyword::Cell(_), _) if extra => Err(ParseError::TooManyArguments),
        (Keyword::Cell(make), [Some(row), Some(col)]) => Ok(make(coordinate(row)?, coordinate(col)?)),
        (Keyword::Cell(_), _) => Err(ParseError::Unrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nullary_commands_and_aliases() {
        assert_eq!(parse_command("nofog"), Ok(Command::ToggleFogOff));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("h"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("  q  \n"), Ok(Command::Quit));
    }

    #[test]
    fn parses_cell_commands_and_aliases() {
        assert_eq!(parse_command("r 1 2"), Ok(Command::Reveal { row: 1, col: 2 }));
        assert_eq!(parse_command("reveal 0 4"), Ok(Command::Reveal { row: 0, col: 4 }));
        assert_eq!(parse_command("m 3 3"), Ok(Command::Flag { row: 3, col: 3 }));
        assert_eq!(parse_command("mark\t3 1"), Ok(Command::Flag { row: 3, col: 1 }));
        assert_eq!(parse_command("g 2 0"), Ok(Command::Guess { row: 2, col: 0 }));
        assert_eq!(parse_command("guess 0 0"), Ok(Command::Guess { row: 0, col: 0 }));
    }

    #[test]
    fn out_of_range_coordinates_still_parse() {
        assert_eq!(parse_command("r -1 20"), Ok(Command::Reveal { row: -1, col: 20 }));
    }

    #[test]
    fn missing_coordinate_is_unrecognized() {
        assert_eq!(parse_command("r 1"), Err(ParseError::Unrecognized));
        assert_eq!(parse_command("mark"), Err(ParseError::Unrecognized));
    }

    #[test]
    fn extra_tokens_are_too_many_arguments() {
        assert_eq!(parse_command("r 1 2 3"), Err(ParseError::TooManyArguments));
        assert_eq!(parse_command("help me"), Err(ParseError::TooManyArguments));
        assert_eq!(parse_command("nofog 1 2"), Err(ParseError::TooManyArguments));
    }

    #[test]
    fn unknown_and_empty_lines_are_unrecognized() {
        assert_eq!(parse_command(""), Err(ParseError::Unrecognized));
        assert_eq!(parse_command("   "), Err(ParseError::Unrecognized));
        assert_eq!(parse_command("flag 1 1"), Err(ParseError::Unrecognized));
        assert_eq!(parse_command("R 1 1"), Err(ParseError::Unrecognized));
    }

    #[test]
    fn non_integer_coordinate_is_malformed() {
        assert_eq!(parse_command("r a 1"), Err(ParseError::MalformedCoordinate));
        assert_eq!(parse_command("g 1 1.5"), Err(ParseError::MalformedCoordinate));
        assert_eq!(
            parse_command("m 1 99999999999"),
            Err(ParseError::MalformedCoordinate)
        );
    }
}
