use timesaurus_core::types::UiEvent;
use timesaurus_core::{Decade, Slot, SlotError};

/// Usage shown before the first dashboard arrives
pub const USAGE: &str = "Commands: decade <year> | type <1-5|line> <text> | commit <1-5|line> \
                         | set <1-5|line> <word> | lang | show | help | quit";

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Ui(UiEvent),
    /// Type `text` into `slot` and commit it right away
    Set { slot: Slot, text: String },
    Help,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Not a decade: '{0}', expected 1920, 1930, ... 2010")]
    BadDecade(String),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (s, ""),
    }
}

/// Parse one input line
///
/// Text after the slot of `type` and `set` is kept verbatim, so
/// `type 1 ` clears the input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Err(CommandError::Empty);
    }

    let (name, rest) = split_word(line);
    match name.to_ascii_lowercase().as_str() {
        "decade" => {
            let year = rest.trim();
            if year.is_empty() {
                return Err(CommandError::MissingArgument("decade"));
            }
            let decade = year
                .parse()
                .ok()
                .and_then(Decade::from_year)
                .ok_or_else(|| CommandError::BadDecade(year.to_string()))?;
            Ok(Command::Ui(UiEvent::DecadeChange(decade)))
        }
        "type" | "set" => {
            let (slot, text) = split_word(rest.trim_start());
            if slot.is_empty() {
                return Err(CommandError::MissingArgument("slot"));
            }
            let slot = Slot::parse(slot)?;
            let text = text.to_string();
            if name.eq_ignore_ascii_case("set") {
                Ok(Command::Set { slot, text })
            } else {
                Ok(Command::Ui(UiEvent::WordInputChange { slot, text }))
            }
        }
        "commit" => {
            let slot = rest.trim();
            if slot.is_empty() {
                return Err(CommandError::MissingArgument("slot"));
            }
            Ok(Command::Ui(UiEvent::WordCommit(Slot::parse(slot)?)))
        }
        "lang" => Ok(Command::Ui(UiEvent::LanguageToggle)),
        "show" => Ok(Command::Ui(UiEvent::Refresh)),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Ui(UiEvent::Close)),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decade() {
        assert_eq!(
            parse_command("decade 1950"),
            Ok(Command::Ui(UiEvent::DecadeChange(Decade::D1950)))
        );
        assert_eq!(
            parse_command("decade 1955"),
            Err(CommandError::BadDecade("1955".to_string()))
        );
        assert_eq!(
            parse_command("decade"),
            Err(CommandError::MissingArgument("decade"))
        );
    }

    #[test]
    fn type_keeps_text_verbatim() {
        assert_eq!(
            parse_command("type 2 Th"),
            Ok(Command::Ui(UiEvent::WordInputChange {
                slot: Slot::bar(2).unwrap(),
                text: "Th".to_string()
            }))
        );
        assert_eq!(
            parse_command("type line "),
            Ok(Command::Ui(UiEvent::WordInputChange {
                slot: Slot::Line,
                text: String::new()
            }))
        );
        assert_eq!(
            parse_command("type 1"),
            Ok(Command::Ui(UiEvent::WordInputChange {
                slot: Slot::bar(1).unwrap(),
                text: String::new()
            }))
        );
    }

    #[test]
    fn set_commits() {
        assert_eq!(
            parse_command("set 5 être"),
            Ok(Command::Set {
                slot: Slot::bar(5).unwrap(),
                text: "être".to_string()
            })
        );
    }

    #[test]
    fn rejects_bad_slots() {
        assert_eq!(
            parse_command("commit 7"),
            Err(CommandError::Slot(SlotError::OutOfRange(7)))
        );
        assert_eq!(
            parse_command("set"),
            Err(CommandError::MissingArgument("slot"))
        );
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("lang"), Ok(Command::Ui(UiEvent::LanguageToggle)));
        assert_eq!(parse_command("  SHOW"), Ok(Command::Ui(UiEvent::Refresh)));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Ui(UiEvent::Close)));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("plot the"),
            Err(CommandError::Unknown("plot".to_string()))
        );
    }
}
