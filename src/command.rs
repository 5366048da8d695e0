//! Line commands accepted by the interactive front-end

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { amount: f64, category: String },
    /// `None` undoes the most recent transaction
    Undo { index: Option<usize> },
    /// Remove the transaction currently shown at `index`
    Remove { index: usize },
    FilterAmount(f64),
    FilterCategory(String),
    Apply,
    Clear,
    List,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Index must be a non-negative whole number: {0}")]
    InvalidIndex(String),
}

pub const HELP: &str = "\
Commands:
  add <amount> <category>     record an expense
  undo [index]                remove the transaction at index (default: most recent)
  remove <index>              remove the transaction shown at index
  filter amount <amount>      set an amount filter
  filter category <name>      set a category filter
  apply                       highlight rows matching the filter
  clear                       drop the filter and highlights
  list                        show the transactions
  help                        show this message
  quit                        exit";

fn parse_amount(s: &str) -> Result<f64, CommandError> {
    s.parse::<f64>()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_index(s: &str) -> Result<usize, CommandError> {
    s.parse::<usize>()
        .map_err(|_| CommandError::InvalidIndex(s.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("add", [amount, category @ ..]) if !category.is_empty() => Ok(Command::Add {
                amount: parse_amount(amount)?,
                category: category.join(" "),
            }),
            ("add", _) => Err(CommandError::Usage("add <amount> <category>")),
            ("undo", []) => Ok(Command::Undo { index: None }),
            ("undo", [index]) => Ok(Command::Undo {
                index: Some(parse_index(index)?),
            }),
            ("undo", _) => Err(CommandError::Usage("undo [index]")),
            ("remove", [index]) => Ok(Command::Remove {
                index: parse_index(index)?,
            }),
            ("remove", _) => Err(CommandError::Usage("remove <index>")),
            ("filter", ["amount", amount]) => Ok(Command::FilterAmount(parse_amount(amount)?)),
            ("filter", ["category", category @ ..]) if !category.is_empty() => {
                Ok(Command::FilterCategory(category.join(" ")))
            }
            ("filter", _) => Err(CommandError::Usage(
                "filter amount <amount> | filter category <name>",
            )),
            ("apply", []) => Ok(Command::Apply),
            ("clear", []) => Ok(Command::Clear),
            ("list" | "ls", []) => Ok(Command::List),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit", _) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}
