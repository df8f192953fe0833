/// Parsing of command lines typed by the user.
use notebook_core::{ParseSortConditionError, SortCondition};

/// Separates a note title from its body or tag.
const FIELD_SEPARATOR: char = '|';

pub const HELP: &str = "\
Commands:
  add <title> [| <content>]   add a note
  edit <title> | <content>    replace a note's content
  delete <title>              delete a note
  tag <title> | <tag>         tag a note
  untag <title> | <tag>       remove a tag
  sort <condition>            insertion, title, created, created-desc
  clear                       delete every note
  list                        show notes in sort order
  find <title>                show one note
  undo                        undo the last command
  redo                        redo the last undone command
  history                     show undo/redo steps
  help                        show this help
  exit                        quit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String, content: String },
    Edit { title: String, content: String },
    Delete { title: String },
    Tag { title: String, tag: String },
    Untag { title: String, tag: String },
    Sort(SortCondition),
    Clear,
    List,
    Find { title: String },
    Undo,
    Redo,
    History,
    Help,
    Exit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Sort(#[from] ParseSortConditionError),
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns an error describing the expected usage when `line` is
    /// malformed.
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "add" => {
                let (title, content) = split_fields(rest);
                Ok(Command::Add {
                    title: required(title, "add <title> [| <content>]")?,
                    content: content.unwrap_or_default().to_string(),
                })
            }
            "edit" => {
                let usage = "edit <title> | <content>";
                let (title, content) = split_fields(rest);
                Ok(Command::Edit {
                    title: required(title, usage)?,
                    content: content.ok_or(ParseCommandError::Usage(usage))?.to_string(),
                })
            }
            "delete" => Ok(Command::Delete {
                title: required(rest, "delete <title>")?,
            }),
            "tag" => {
                let (title, tag) = title_and_tag(rest, "tag <title> | <tag>")?;
                Ok(Command::Tag { title, tag })
            }
            "untag" => {
                let (title, tag) = title_and_tag(rest, "untag <title> | <tag>")?;
                Ok(Command::Untag { title, tag })
            }
            "sort" => {
                required(rest, "sort <insertion|title|created|created-desc>")?;
                Ok(Command::Sort(rest.parse()?))
            }
            "find" => Ok(Command::Find {
                title: required(rest, "find <title>")?,
            }),
            "clear" => Ok(Command::Clear),
            "list" => Ok(Command::List),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "history" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Splits `title | rest` into its trimmed halves.
fn split_fields(input: &str) -> (&str, Option<&str>) {
    match input.split_once(FIELD_SEPARATOR) {
        Some((title, rest)) => (title.trim(), Some(rest.trim())),
        None => (input.trim(), None),
    }
}

fn required(field: &str, usage: &'static str) -> Result<String, ParseCommandError> {
    if field.is_empty() {
        return Err(ParseCommandError::Usage(usage));
    }
    Ok(field.to_string())
}

fn title_and_tag(rest: &str, usage: &'static str) -> Result<(String, String), ParseCommandError> {
    let (title, tag) = split_fields(rest);
    let tag = tag.unwrap_or_default();
    Ok((required(title, usage)?, required(tag, usage)?))
}
