//! Shell commands
//!
//! One command per input line. Rows, fields, and character info positions are
//! typed 1-based, as the renderer numbers them, and stored 0-based here.
//! Free-text values run to the end of the line; `\n` inside a value becomes a
//! line break, and `add` splits its values on `|`.

use std::str::FromStr;

use sheetkeep_domain::{DomainError, SectionKind};

pub const HELP: &str = "\
Commands:
  show [section]                      show the whole sheet or one section
  info <n> <value>                    set character info field n
  add <section> [v1|v2|...]           add an entry (missing values are blank)
  set <section> <row> <field> <value> set one field of an entry
  remove <section> <row>              remove an entry (asks first)
  save                                save the sheet
  load [file]                         load the sheet, optionally from another file
  new                                 start a blank sheet
  help                                show this help
  quit                                leave

Sections: attacks, skills, achievements, inventory, notes, gm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Option<SectionKind>),
    SetInfo {
        index: usize,
        value: String,
    },
    Add {
        kind: SectionKind,
        values: Vec<String>,
    },
    Set {
        kind: SectionKind,
        row: usize,
        field: usize,
        value: String,
    },
    Remove {
        kind: SectionKind,
        row: usize,
    },
    Save,
    Load(Option<String>),
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Expected a number from 1 up, got {0:?}")]
    BadNumber(String),
    #[error(transparent)]
    Section(#[from] DomainError),
}

/// Split off the first whitespace-separated word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

/// Parse a 1-based number into a 0-based index.
fn parse_position(word: &str) -> Result<usize, CommandError> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadNumber(word.to_string())),
    }
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

fn required<'a>(word: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if word.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(word)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = next_word(line.trim());

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "show" | "ls" => {
                let (section, _) = next_word(rest);
                if section.is_empty() {
                    Ok(Self::Show(None))
                } else {
                    Ok(Self::Show(Some(section.parse()?)))
                }
            }
            "info" => {
                const USAGE: &str = "info <n> <value>";
                let (index, value) = next_word(rest);
                Ok(Self::SetInfo {
                    index: parse_position(required(index, USAGE)?)?,
                    value: unescape(value.trim_end()),
                })
            }
            "add" => {
                const USAGE: &str = "add <section> [v1|v2|...]";
                let (section, values) = next_word(rest);
                let kind = required(section, USAGE)?.parse()?;
                let values = values.trim_end();
                let values = if values.is_empty() {
                    Vec::new()
                } else {
                    values.split('|').map(|v| unescape(v.trim())).collect()
                };
                Ok(Self::Add { kind, values })
            }
            "set" => {
                const USAGE: &str = "set <section> <row> <field> <value>";
                let (section, rest) = next_word(rest);
                let (row, rest) = next_word(rest);
                let (field, value) = next_word(rest);
                Ok(Self::Set {
                    kind: required(section, USAGE)?.parse()?,
                    row: parse_position(required(row, USAGE)?)?,
                    field: parse_position(required(field, USAGE)?)?,
                    value: unescape(value.trim_end()),
                })
            }
            "remove" | "rm" => {
                const USAGE: &str = "remove <section> <row>";
                let (section, rest) = next_word(rest);
                let (row, _) = next_word(rest);
                Ok(Self::Remove {
                    kind: required(section, USAGE)?.parse()?,
                    row: parse_position(required(row, USAGE)?)?,
                })
            }
            "save" => Ok(Self::Save),
            "load" | "open" => {
                let (file, _) = next_word(rest);
                Ok(Self::Load((!file.is_empty()).then(|| file.to_string())))
            }
            "new" => Ok(Self::New),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}
