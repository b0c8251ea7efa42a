//! Text syntax for events.
//!
//! One event per line, case-insensitive. `#` starts a comment and blank
//! lines are skipped.
//!
//! | Line | Event |
//! |---|---|
//! | `1`, `2`, `5`, `10`, `add 5`, `coin 5` | `AddCredit` |
//! | `up`, `u` | `NavigateUp` |
//! | `down`, `d` | `NavigateDown` |
//! | `select`, `sel`, `s` | `Select` |
//! | `return`, `ret`, `r` | `ReturnCredit` |
//! | `none`, `idle` | `None` |

use crate::core::{Denomination, Event};
use crate::input::error::{ParseEventError, ScriptError};
use std::str::FromStr;

fn coin(token: &str) -> Result<Event, ParseEventError> {
    let units: u32 = token
        .parse()
        .map_err(|_| ParseEventError::UnknownToken(token.to_string()))?;
    Denomination::from_units(units)
        .map(Event::AddCredit)
        .ok_or(ParseEventError::InvalidDenomination(units))
}

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let mut tokens = lowered.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err(ParseEventError::UnknownToken(String::new()));
        };

        let event = match head {
            "none" | "idle" => Event::None,
            "up" | "u" => Event::NavigateUp,
            "down" | "d" => Event::NavigateDown,
            "select" | "sel" | "s" => Event::Select,
            "return" | "ret" | "r" => Event::ReturnCredit,
            "add" | "coin" => {
                let value = tokens
                    .next()
                    .ok_or_else(|| ParseEventError::MissingDenomination(head.to_string()))?;
                coin(value)?
            }
            other => coin(other)?,
        };

        match tokens.next() {
            Some(extra) => Err(ParseEventError::UnknownToken(extra.to_string())),
            None => Ok(event),
        }
    }
}

/// Parse one script line; blank and comment-only lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Event>, ParseEventError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }
    content.parse().map(Some)
}

/// Parse a whole script, reporting the first bad line.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Denomination, Event};
/// use kiosk::input::parse_script;
///
/// let events = parse_script("10\n# browse\nup\nselect\n").unwrap();
/// assert_eq!(
///     events,
///     vec![
///         Event::AddCredit(Denomination::Ten),
///         Event::NavigateUp,
///         Event::Select,
///     ]
/// );
///
/// let error = parse_script("up\n3\n").unwrap_err();
/// assert_eq!(error.line, 2);
/// ```
pub fn parse_script(text: &str) -> Result<Vec<Event>, ScriptError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_line(line) {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(source) => Some(Err(ScriptError {
                line: index + 1,
                source,
            })),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        assert_eq!("none".parse::<Event>().unwrap(), Event::None);
        assert_eq!("UP".parse::<Event>().unwrap(), Event::NavigateUp);
        assert_eq!("d".parse::<Event>().unwrap(), Event::NavigateDown);
        assert_eq!("sel".parse::<Event>().unwrap(), Event::Select);
        assert_eq!("Return".parse::<Event>().unwrap(), Event::ReturnCredit);
        assert_eq!(
            "2".parse::<Event>().unwrap(),
            Event::AddCredit(Denomination::Two)
        );
        assert_eq!(
            "coin 10".parse::<Event>().unwrap(),
            Event::AddCredit(Denomination::Ten)
        );
    }

    #[test]
    fn display_output_parses_back() {
        for event in [
            Event::None,
            Event::AddCredit(Denomination::Five),
            Event::NavigateUp,
            Event::NavigateDown,
            Event::Select,
            Event::ReturnCredit,
        ] {
            assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
        }
    }

    #[test]
    fn rejects_unaccepted_coin() {
        assert_eq!(
            "add 3".parse::<Event>(),
            Err(ParseEventError::InvalidDenomination(3))
        );
    }

    #[test]
    fn rejects_missing_coin_value() {
        assert_eq!(
            "add".parse::<Event>(),
            Err(ParseEventError::MissingDenomination("add".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_and_trailing_tokens() {
        assert_eq!(
            "jump".parse::<Event>(),
            Err(ParseEventError::UnknownToken("jump".to_string()))
        );
        assert_eq!(
            "up now".parse::<Event>(),
            Err(ParseEventError::UnknownToken("now".to_string()))
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# just a comment"), Ok(None));
        assert_eq!(parse_line("up # go up"), Ok(Some(Event::NavigateUp)));
    }

    #[test]
    fn script_errors_carry_line_numbers() {
        let error = parse_script("10\n\nfly\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(error.to_string(), "Line 3: Unknown event \"fly\"");
    }
}
