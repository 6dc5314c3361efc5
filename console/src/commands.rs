use std::str::FromStr;

use shared::constants::OPENING_IN_PROGRESS_ERROR;
use shared::{CaseId, OpeningPhase};
use strum::{EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;
use tracing::warn;

use crate::opener::CaseOpener;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Cases,
    Open,
    Close,
    Inventory,
    Profile,
    Rules,
    Help,
    #[strum(to_string = "quit", serialize = "exit")]
    Quit,
}

impl Keyword {
    fn usage(&self) -> &'static str {
        match self {
            Self::Cases => "cases          list the cases",
            Self::Open => "open <id>      open a case",
            Self::Close => "close          close the roulette",
            Self::Inventory => "inventory      show won items",
            Self::Profile => "profile        show the player profile",
            Self::Rules => "rules          show rarity chances and how to play",
            Self::Help => "help           show this list",
            Self::Quit => "quit           leave the game",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cases,
    Open(CaseId),
    Close,
    Inventory,
    Profile,
    Rules,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help`")]
    UnknownCommand(String),
    #[error("usage: open <id>")]
    MissingCaseId,
    #[error("`{0}` is not a case id")]
    InvalidCaseId(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or(ParseError::Empty)?;
        let keyword =
            Keyword::from_str(word).map_err(|_| ParseError::UnknownCommand(word.to_string()))?;

        Ok(match keyword {
            Keyword::Cases => Self::Cases,
            Keyword::Open => {
                let raw = words.next().ok_or(ParseError::MissingCaseId)?;
                let id = raw
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidCaseId(raw.to_string()))?;
                Self::Open(CaseId(id))
            }
            Keyword::Close => Self::Close,
            Keyword::Inventory => Self::Inventory,
            Keyword::Profile => Self::Profile,
            Keyword::Rules => Self::Rules,
            Keyword::Help => Self::Help,
            Keyword::Quit => Self::Quit,
        })
    }
}

pub fn help() -> String {
    let mut out = String::from("Commands:");
    for keyword in Keyword::iter() {
        out.push_str("\n  ");
        out.push_str(keyword.usage());
    }
    out
}

/// Runs one command against the opener and returns what to print. `Quit` prints nothing.
pub fn execute(opener: &CaseOpener, command: Command) -> Option<String> {
    let output = match command {
        Command::Cases => render::cases(&opener.list_cases()),
        Command::Open(case_id) => {
            if opener.phase() != OpeningPhase::Idle {
                return Some(OPENING_IN_PROGRESS_ERROR.to_string());
            }
            match opener.open_case(case_id) {
                Ok(_) => match opener.selected_case() {
                    Some(case) => render::opening(&case),
                    None => return None,
                },
                Err(e) => {
                    warn!("Open rejected: {}", e);
                    e.to_string()
                }
            }
        }
        Command::Close => {
            opener.close_session();
            "Closed.".to_string()
        }
        Command::Inventory => render::inventory(&opener.inventory()),
        Command::Profile => render::profile(opener.inventory().len()),
        Command::Rules => render::rules(),
        Command::Help => help(),
        Command::Quit => return None,
    };
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::Catalog;
    use std::sync::Arc;
    use std::time::Duration;

    fn opener() -> CaseOpener {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        CaseOpener::new(catalog, Duration::from_millis(3000), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("cases".parse::<Command>(), Ok(Command::Cases));
        assert_eq!("  open 2 ".parse::<Command>(), Ok(Command::Open(CaseId(2))));
        assert_eq!("OPEN 3".parse::<Command>(), Ok(Command::Open(CaseId(3))));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("inventory".parse::<Command>(), Ok(Command::Inventory));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("open".parse::<Command>(), Err(ParseError::MissingCaseId));
        assert_eq!(
            "open gold".parse::<Command>(),
            Err(ParseError::InvalidCaseId("gold".to_string()))
        );
        assert_eq!(
            "spin".parse::<Command>(),
            Err(ParseError::UnknownCommand("spin".to_string()))
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let text = help();
        for keyword in Keyword::iter() {
            assert!(text.contains(&keyword.to_string()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_is_refused_while_busy() {
        let opener = opener();
        let first = execute(&opener, Command::Open(CaseId(1))).unwrap();
        assert!(first.contains("Starter Case"));

        let second = execute(&opener, Command::Open(CaseId(2))).unwrap();
        assert_eq!(second, OPENING_IN_PROGRESS_ERROR);
        assert_eq!(opener.selected_case().unwrap().id(), CaseId(1));

        tokio::time::sleep(Duration::from_millis(3001)).await;
        let refused = execute(&opener, Command::Open(CaseId(2))).unwrap();
        assert_eq!(refused, OPENING_IN_PROGRESS_ERROR);

        execute(&opener, Command::Close);
        let profile = execute(&opener, Command::Profile).unwrap();
        assert!(profile.contains("Cases opened: 1"));

        let reopened = execute(&opener, Command::Open(CaseId(2))).unwrap();
        assert!(reopened.contains("Premium Case"));
    }

    #[tokio::test]
    async fn test_open_unknown_case() {
        let opener = opener();
        let text = execute(&opener, Command::Open(CaseId(9))).unwrap();
        assert_eq!(text, "no case with id 9");
        assert_eq!(opener.phase(), OpeningPhase::Idle);
    }

    #[test]
    fn test_quit_prints_nothing() {
        assert_eq!(execute(&opener(), Command::Quit), None);
    }
}
