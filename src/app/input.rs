use evogrid_data::{Diet, OrganismId};
use thiserror::Error;

/// One line typed at the day prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance this many days (at least 1).
    Next(u64),
    Quit,
    Oldest,
    Dead,
    Diets,
    Inspect(OrganismId),
    Json(OrganismId),
    Lineage(OrganismId),
    Add(Diet),
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl Command {
    /// Parses a prompt line. Case and surrounding whitespace are ignored;
    /// a bare number inspects that organism.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.clone()));
        }

        match (head, arg) {
            ("next" | "n", None) => Ok(Command::Next(1)),
            ("next" | "n", Some(n)) => match n.parse::<u64>() {
                Ok(days) if days > 0 => Ok(Command::Next(days)),
                _ => Err(CommandError::BadArgument {
                    command: "next",
                    expected: "a positive number of days",
                }),
            },
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            ("oldest", None) => Ok(Command::Oldest),
            ("dead", None) => Ok(Command::Dead),
            ("diets", None) => Ok(Command::Diets),
            ("help" | "?", None) => Ok(Command::Help),
            ("json", Some(id)) => parse_id("json", id).map(Command::Json),
            ("lineage", Some(id)) => parse_id("lineage", id).map(Command::Lineage),
            ("add", Some(diet)) => diet.parse().map(Command::Add).map_err(|_| {
                CommandError::BadArgument {
                    command: "add",
                    expected: "herbivore, omnivore or carnivore",
                }
            }),
            ("json", None) | ("lineage", None) | ("add", None) => Err(CommandError::BadArgument {
                command: static_name(head),
                expected: "an argument",
            }),
            (id, None) if id.chars().all(|c| c.is_ascii_digit()) => {
                parse_id("inspect", id).map(Command::Inspect)
            }
            _ => Err(CommandError::Unknown(line.clone())),
        }
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<OrganismId, CommandError> {
    raw.parse().map_err(|_| CommandError::BadArgument {
        command,
        expected: "an organism id (1 or greater)",
    })
}

fn static_name(head: &str) -> &'static str {
    match head {
        "json" => "json",
        "lineage" => "lineage",
        _ => "add",
    }
}
