//! Line grammar of DIMACS files.
//!
//! | first token | line    | tokens                          |
//! |-------------|---------|---------------------------------|
//! | `c`         | comment | any                             |
//! | `p`         | problem | `p <name> <nodes> <edges>`      |
//! | `a`         | arc     | `a <source> <target> <weight>`  |

use super::error::{ErrorKind, Malformed};
use crate::types::{NodeId, Weight};
use derive_more::Display;
use itertools::Itertools;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    #[display(fmt = "comment")]
    Comment,
    #[display(fmt = "problem")]
    Problem,
    #[display(fmt = "arc")]
    Arc,
}

impl LineKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "c" => Some(LineKind::Comment),
            "p" => Some(LineKind::Problem),
            "a" => Some(LineKind::Arc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Problem {
        name: &'a str,
        node_count: usize,
        edge_count: usize,
    },
    Arc {
        source: NodeId,
        target: NodeId,
        weight: Weight,
    },
}

impl<'a> Line<'a> {
    pub fn kind(&self) -> Option<LineKind> {
        match self {
            Line::Blank => None,
            Line::Comment => Some(LineKind::Comment),
            Line::Problem { .. } => Some(LineKind::Problem),
            Line::Arc { .. } => Some(LineKind::Arc),
        }
    }
}

/// Parses an already tokenized line.
///
/// Node ids are not checked against the problem here, the reader does that
/// once the node count is known.
pub fn parse_line<'a>(tokens: &[&'a str]) -> Result<Line<'a>, ErrorKind> {
    let first = match tokens.first() {
        Some(&first) => first,
        None => return Ok(Line::Blank),
    };
    match LineKind::from_token(first) {
        Some(LineKind::Comment) => Ok(Line::Comment),
        Some(LineKind::Problem) => {
            let (name, node_count, edge_count) = operands(tokens)?;
            let node_count = integer(node_count)?;
            if node_count == 0 {
                return Err(ErrorKind::MalformedLine(Malformed::ZeroNodes));
            }
            Ok(Line::Problem {
                name,
                node_count,
                edge_count: integer(edge_count)?,
            })
        }
        Some(LineKind::Arc) => {
            let (source, target, weight) = operands(tokens)?;
            Ok(Line::Arc {
                source: integer(source)?,
                target: integer(target)?,
                weight: real(weight)?,
            })
        }
        None => Err(ErrorKind::UnknownLineKind(String::from(first))),
    }
}

/// The three tokens following the line kind.
fn operands<'a>(tokens: &[&'a str]) -> Result<(&'a str, &'a str, &'a str), ErrorKind> {
    tokens[1..].iter().copied().collect_tuple().ok_or_else(|| {
        ErrorKind::MalformedLine(Malformed::TokenCount {
            expected: 4,
            found: tokens.len(),
        })
    })
}

fn integer(token: &str) -> Result<usize, ErrorKind> {
    token
        .parse()
        .map_err(|_| ErrorKind::MalformedLine(Malformed::InvalidInteger(String::from(token))))
}

fn real(token: &str) -> Result<Weight, ErrorKind> {
    match token.parse::<Weight>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ErrorKind::MalformedLine(Malformed::InvalidReal(
            String::from(token),
        ))),
    }
}
