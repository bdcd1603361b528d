//! Line grammar of the editor.
//!
//! A line is one of:
//!
//! - a reserved verb (`list`, `add x || 1`, `pow x 2`, ...),
//! - an assignment `name || value`,
//! - a bare identifier that navigates to an entry,
//! - blank.
//!
//! Anything else is a [`ParseError`]. Parsing is pure and never touches a
//! registry; name resolution happens afterwards.

use std::path::PathBuf;

use thiserror::Error;

use crate::classify::{is_assignment, is_numeric, is_numeric_literal, is_operator};
use crate::{EntryNameError, Marker};

/// Reserved, case-sensitive keywords.
pub const VERBS: &[&str] = &[
    "list", "help", "add", "erase", "store", "load", "sqrt", "pow", "clear", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing entry name before `{marker}`")]
    MissingName { marker: String },
    #[error("missing value after `{marker}`")]
    MissingValue { marker: String },
    #[error("missing `{marker}` between name and value")]
    MissingMarker { marker: String },
    #[error("entry name `{0}` must not contain marker characters")]
    MarkerInName(String),
    #[error("entry name `{0}` cannot start with a command word or end with a number")]
    ReservedName(String),
    #[error(transparent)]
    InvalidName(#[from] EntryNameError),
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("expressions are not supported: `{0}`")]
    Expression(String),
    #[error("`{verb}` expects {expected}")]
    MissingArgument {
        verb: &'static str,
        expected: &'static str,
    },
    #[error("`{verb}` takes no arguments")]
    UnexpectedArgument { verb: &'static str },
}

/// `target || value`. The target is a candidate name, possibly partial.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verb {
    List,
    Help,
    Add(Assignment),
    Erase(String),
    Store(Option<PathBuf>),
    Load(Option<PathBuf>),
    Sqrt(Option<String>),
    Pow {
        target: Option<String>,
        exponent: f64,
    },
    Clear,
    Quit,
}

/// Parsed line with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Verb(Verb),
    Assign(Assignment),
    Navigate(String),
    Empty,
}

/// Classify one line of input.
pub fn parse_line(line: &str, marker: &Marker) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (keyword, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(keyword, args)| (keyword, args.trim()));
    if let Some(verb) = parse_verb(keyword, args, marker) {
        return verb.map(Command::Verb);
    }

    if marker.find_in(line).is_some() {
        return parse_assignment(line, marker).map(Command::Assign);
    }

    parse_navigation(line, marker)
}

/// Parse `name<marker>value`.
///
/// Marker characters after the first marker are treated as whitespace, so
/// `x || || 3` reads the same as `x || 3`.
pub fn parse_assignment(text: &str, marker: &Marker) -> Result<Assignment, ParseError> {
    let Some(at) = marker.find_in(text) else {
        return Err(ParseError::MissingMarker {
            marker: marker.to_string(),
        });
    };

    let name = text[..at].trim();
    if name.is_empty() {
        return Err(ParseError::MissingName {
            marker: marker.to_string(),
        });
    }
    if name.chars().any(|c| is_assignment(c, marker)) {
        return Err(ParseError::MarkerInName(name.to_string()));
    }
    if !is_navigable(name) {
        return Err(ParseError::ReservedName(name.to_string()));
    }

    let tail: String = text[at + marker.len()..]
        .chars()
        .map(|c| if is_assignment(c, marker) { ' ' } else { c })
        .collect();
    let (before, literal) = split_numeric_suffix(&tail);
    let before = before.trim();

    if literal.is_empty() {
        if before.is_empty() {
            return Err(ParseError::MissingValue {
                marker: marker.to_string(),
            });
        }
        return Err(reject_tail(before));
    }
    if !before.is_empty() {
        return Err(reject_tail(&format!("{before} {literal}")));
    }

    Ok(Assignment {
        target: name.to_string(),
        value: parse_literal(literal)?,
    })
}

/// A name can be typed back as a navigation line: its first word is not a
/// verb and its last word is not a number.
fn is_navigable(name: &str) -> bool {
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or(name);
    let last = words.next_back().unwrap_or(first);
    !VERBS.contains(&first) && !is_numeric_literal(last)
}

fn parse_verb(
    keyword: &str,
    args: &str,
    marker: &Marker,
) -> Option<Result<Verb, ParseError>> {
    let verb = match keyword {
        "list" => no_args("list", args).map(|()| Verb::List),
        "help" => no_args("help", args).map(|()| Verb::Help),
        "clear" => no_args("clear", args).map(|()| Verb::Clear),
        "quit" => no_args("quit", args).map(|()| Verb::Quit),
        "add" => {
            if args.is_empty() {
                Err(ParseError::MissingArgument {
                    verb: "add",
                    expected: "a name, the marker and a value",
                })
            } else {
                parse_assignment(args, marker).map(Verb::Add)
            }
        }
        "erase" => {
            if args.is_empty() {
                Err(ParseError::MissingArgument {
                    verb: "erase",
                    expected: "an entry name",
                })
            } else {
                Ok(Verb::Erase(args.to_string()))
            }
        }
        "store" => Ok(Verb::Store(optional_path(args))),
        "load" => Ok(Verb::Load(optional_path(args))),
        "sqrt" => Ok(Verb::Sqrt(optional_target(args))),
        "pow" => parse_pow(args),
        _ => return None,
    };
    Some(verb)
}

/// `pow [target] <exponent>`: the exponent is always the last token.
fn parse_pow(args: &str) -> Result<Verb, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArgument {
            verb: "pow",
            expected: "an exponent",
        });
    }
    let (target, exponent) = match args.rsplit_once(char::is_whitespace) {
        Some((target, exponent)) => (optional_target(target), exponent),
        None => (None, args),
    };
    Ok(Verb::Pow {
        target,
        exponent: parse_literal(exponent)?,
    })
}

fn parse_navigation(line: &str, marker: &Marker) -> Result<Command, ParseError> {
    let last = line.split_whitespace().last().unwrap_or(line);
    if is_numeric_literal(last) {
        if last.len() == line.len() {
            return Err(ParseError::MissingName {
                marker: marker.to_string(),
            });
        }
        return Err(ParseError::MissingMarker {
            marker: marker.to_string(),
        });
    }
    Ok(Command::Navigate(line.to_string()))
}

fn no_args(verb: &'static str, args: &str) -> Result<(), ParseError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedArgument { verb })
    }
}

fn optional_path(args: &str) -> Option<PathBuf> {
    (!args.is_empty()).then(|| PathBuf::from(args))
}

fn optional_target(args: &str) -> Option<String> {
    let args = args.trim();
    (!args.is_empty()).then(|| args.to_string())
}

/// Split off the maximal run of numeric characters at the end of `text`,
/// ignoring trailing whitespace.
fn split_numeric_suffix(text: &str) -> (&str, &str) {
    let text = text.trim_end();
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_numeric(c))
        .last()
        .map_or(text.len(), |(i, _)| i);
    text.split_at(start)
}

fn parse_literal(run: &str) -> Result<f64, ParseError> {
    if !is_numeric_literal(run) {
        let has_inner_sign = run.chars().skip(1).any(|c| matches!(c, '+' | '-'));
        return Err(if has_inner_sign {
            ParseError::Expression(run.to_string())
        } else {
            ParseError::InvalidNumber(run.to_string())
        });
    }
    // Overlong digit runs parse to infinity rather than failing.
    run.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber(run.to_string()))
}

fn reject_tail(tail: &str) -> ParseError {
    if tail.chars().any(is_operator) {
        ParseError::Expression(tail.to_string())
    } else {
        ParseError::InvalidNumber(tail.to_string())
    }
}
