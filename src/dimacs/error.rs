//! Error management.

use super::grammar::LineKind;
use derive_more::Display;
use std::{
    fmt,
    path::{Path, PathBuf},
};

pub type Result<T> = std::result::Result<T, Error>;

/// Why a line failed to parse.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Malformed {
    #[display(fmt = "invalid number of tokens: expected {}, found {}", expected, found)]
    TokenCount { expected: usize, found: usize },
    #[display(fmt = "invalid integer `{}`", _0)]
    InvalidInteger(String),
    #[display(fmt = "invalid real number `{}`", _0)]
    InvalidReal(String),
    #[display(fmt = "the problem declares no nodes")]
    ZeroNodes,
    #[display(fmt = "cannot allocate {} nodes", _0)]
    TooManyNodes(usize),
}

#[derive(Debug, Display)]
pub enum ErrorKind {
    #[display(fmt = "invalid file format `{}`", _0)]
    UnsupportedFormat(String),
    #[display(fmt = "missing the problem line")]
    MissingProblemLine,
    #[display(fmt = "multiple problem lines found")]
    DuplicateProblemLine,
    #[display(fmt = "edge read before the problem")]
    EdgeBeforeProblem,
    #[display(fmt = "{}", _0)]
    MalformedLine(Malformed),
    #[display(fmt = "line starts with unknown token `{}`", _0)]
    UnknownLineKind(String),
    #[display(fmt = "node id {} is out of range [1, {}]", id, node_count)]
    NodeIdOutOfRange { id: usize, node_count: usize },
    #[display(fmt = "problem declares {} edges but {} were read", declared, actual)]
    EdgeCountMismatch { declared: usize, actual: usize },
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
}

/// A failed parse, located in the input.
#[derive(Debug)]
pub struct Error {
    path: PathBuf,
    line: Option<usize>,
    line_kind: Option<LineKind>,
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(path: &Path, kind: ErrorKind) -> Self {
        Self {
            path: path.to_path_buf(),
            line: None,
            line_kind: None,
            kind,
        }
    }

    pub(crate) fn at(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub(crate) fn on(mut self, line_kind: Option<LineKind>) -> Self {
        self.line_kind = line_kind;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The 1-based line the fault was detected on.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn line_kind(&self) -> Option<LineKind> {
        self.line_kind
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path.display(), line, self.kind),
            None => write!(f, "{}: {}", self.path.display(), self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path = Path::new("graph.gr");
        assert_eq!(
            Error::new(path, ErrorKind::EdgeBeforeProblem)
                .at(3)
                .on(Some(LineKind::Arc))
                .to_string(),
            "graph.gr:3: edge read before the problem"
        );
        assert_eq!(
            Error::new(path, ErrorKind::MissingProblemLine).to_string(),
            "graph.gr: missing the problem line"
        );
        assert_eq!(
            Error::new(
                path,
                ErrorKind::MalformedLine(Malformed::TokenCount {
                    expected: 4,
                    found: 1
                })
            )
            .at(1)
            .to_string(),
            "graph.gr:1: invalid number of tokens: expected 4, found 1"
        );
        assert_eq!(
            Error::new(path, ErrorKind::UnsupportedFormat(String::from("METIS"))).to_string(),
            "graph.gr: invalid file format `METIS`"
        );
    }
}
