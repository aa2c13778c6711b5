//! Two-pass CSR construction.
//!
//! The input is scanned three times, rewinding in between:
//!
//! 1. find and validate the problem line;
//! 2. validate every arc and count the out-degree of its source;
//! 3. place every arc in the slot reserved for it by the prefix sum of the
//!    degrees.
//!
//! Passes 2 and 3 go through the same line visitor, so they see the arcs in
//! the same order and the fill ends exactly on the row offsets.

use super::{
    error::{Error, ErrorKind, Malformed, Result},
    grammar::{parse_line, Line, LineKind},
    options::{BlankLines, EdgeCountPolicy, ReadOptions},
    tokenizer::tokenize,
};
use crate::{
    graph::Graph,
    types::{NodeId, Weight},
};
use log::{debug, warn};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Seek, SeekFrom},
    path::Path,
};

/// The only format tag accepted by the reader.
pub const FORMAT: &str = "DIMACS";

/// Reads the DIMACS file at `path` with the default [`ReadOptions`].
pub fn read_from_file<P: AsRef<Path>>(path: P, format: &str) -> Result<Graph> {
    DimacsReader::new().read_from_file(path, format)
}

/// A configured DIMACS reader.
///
/// ```no_run
/// use dimacs_csr::dimacs::{DimacsReader, EdgeCountPolicy};
///
/// let graph = DimacsReader::new()
///     .edge_count_policy(EdgeCountPolicy::Strict)
///     .read_from_file("USA-road-d.NY.gr", "DIMACS")?;
/// # Ok::<(), dimacs_csr::dimacs::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DimacsReader {
    options: ReadOptions,
}

impl DimacsReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn edge_count_policy(mut self, policy: EdgeCountPolicy) -> Self {
        self.options.edge_count_policy = policy;
        self
    }

    pub fn blank_lines(mut self, blank_lines: BlankLines) -> Self {
        self.options.blank_lines = blank_lines;
        self
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Reads the file at `path`, which must be in the `format` format.
    ///
    /// The file is closed before returning, whatever the outcome.
    pub fn read_from_file<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<Graph> {
        let path = path.as_ref();
        if format != FORMAT {
            return Err(Error::new(
                path,
                ErrorKind::UnsupportedFormat(String::from(format)),
            ));
        }
        let file = File::open(path).map_err(|e| Error::new(path, ErrorKind::Io(e)))?;
        self.read(BufReader::new(file), path)
    }

    /// Reads DIMACS text from `reader`; `path` only names the input in errors.
    pub fn read<R: BufRead + Seek>(&self, reader: R, path: &Path) -> Result<Graph> {
        Builder {
            reader,
            path,
            options: self.options,
        }
        .build()
    }
}

struct Header {
    line: usize,
    name: String,
    node_count: usize,
    edge_count: usize,
}

struct Builder<'a, R> {
    reader: R,
    path: &'a Path,
    options: ReadOptions,
}

impl<'a, R: BufRead + Seek> Builder<'a, R> {
    fn build(mut self) -> Result<Graph> {
        let header = self.scan_header()?;
        let node_count = header.node_count;
        debug!(
            "{}:{}: problem `{}` with {} nodes and {} edges",
            self.path.display(),
            header.line,
            header.name,
            node_count,
            header.edge_count
        );

        // Index 0 is unused, DIMACS ids start at 1.
        let mut degrees = node_count
            .checked_add(1)
            .and_then(zeroed)
            .ok_or_else(|| {
                Error::new(
                    self.path,
                    ErrorKind::MalformedLine(Malformed::TooManyNodes(node_count)),
                )
                .at(header.line)
                .on(Some(LineKind::Problem))
            })?;
        self.scan_arcs(&header, |source, _, _| {
            degrees[source] += 1;
            Ok(())
        })?;
        let row_offsets = prefix_sum(&degrees[1..]);
        let num_arcs = row_offsets[node_count];
        debug!("{}: counted {} arcs", self.path.display(), num_arcs);
        self.check_edge_count(&header, num_arcs)?;

        let mut cursors = row_offsets[..node_count].to_vec();
        let mut column_indices = vec![0; num_arcs];
        let mut edge_weights = vec![0.0; num_arcs];
        self.scan_arcs(&header, |source, target, weight| {
            let cursor = &mut cursors[source - 1];
            if *cursor == row_offsets[source] {
                return Err(input_changed());
            }
            column_indices[*cursor] = target;
            edge_weights[*cursor] = weight;
            *cursor += 1;
            Ok(())
        })?;
        if cursors[..] != row_offsets[1..] {
            return Err(Error::new(self.path, input_changed()));
        }
        debug!("{}: filled {} arcs", self.path.display(), num_arcs);

        Ok(Graph::new(
            header.name,
            header.edge_count,
            row_offsets,
            column_indices,
            edge_weights,
            vec![0.0; node_count],
        ))
    }

    fn scan_header(&mut self) -> Result<Header> {
        let order = |kind: LineKind| match kind {
            LineKind::Arc => Err(ErrorKind::EdgeBeforeProblem),
            _ => Ok(()),
        };
        let header = self.scan(0, order, |number, line| match line {
            Line::Problem {
                name,
                node_count,
                edge_count,
            } => Ok(Some(Header {
                line: number,
                name: String::from(name),
                node_count,
                edge_count,
            })),
            _ => Ok(None),
        })?;
        header.ok_or_else(|| Error::new(self.path, ErrorKind::MissingProblemLine))
    }

    /// Feeds the validated arcs following the problem line to `visit`.
    fn scan_arcs<F>(&mut self, header: &Header, mut visit: F) -> Result<()>
    where
        F: FnMut(NodeId, NodeId, Weight) -> std::result::Result<(), ErrorKind>,
    {
        let node_count = header.node_count;
        let check = |id: NodeId| {
            if (1..=node_count).contains(&id) {
                Ok(id)
            } else {
                Err(ErrorKind::NodeIdOutOfRange { id, node_count })
            }
        };
        let order = |kind: LineKind| match kind {
            LineKind::Problem => Err(ErrorKind::DuplicateProblemLine),
            _ => Ok(()),
        };
        self.scan(
            header.line,
            order,
            |_, line| -> std::result::Result<Option<()>, ErrorKind> {
                match line {
                    Line::Arc {
                        source,
                        target,
                        weight,
                    } => {
                        visit(check(source)?, check(target)?, weight)?;
                        Ok(None)
                    }
                    _ => Ok(None),
                }
            },
        )?;
        Ok(())
    }

    /// Scans the input from the top, skipping the first `skip` lines, until
    /// `visit` returns a value.
    ///
    /// Every line is tokenized before anything looks at it. `order` sees the
    /// kind of each line before its tokens are validated, so a line in the
    /// wrong place is reported as such even when it is malformed. Errors are
    /// located at the line being visited.
    fn scan<T, O, F>(&mut self, skip: usize, order: O, mut visit: F) -> Result<Option<T>>
    where
        O: Fn(LineKind) -> std::result::Result<(), ErrorKind>,
        F: FnMut(usize, Line<'_>) -> std::result::Result<Option<T>, ErrorKind>,
    {
        let path = self.path;
        let blank_lines = self.options.blank_lines;
        self.reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::new(path, ErrorKind::Io(e)))?;
        let mut buf = String::new();
        let mut number = 0;
        loop {
            buf.clear();
            let len = self
                .reader
                .read_line(&mut buf)
                .map_err(|e| Error::new(path, ErrorKind::Io(e)).at(number + 1))?;
            if len == 0 {
                return Ok(None);
            }
            number += 1;
            if number <= skip {
                continue;
            }
            let tokens = tokenize(&buf);
            let kind = tokens.first().and_then(|&token| LineKind::from_token(token));
            let locate = |e: ErrorKind| Error::new(path, e).at(number).on(kind);
            if let Some(kind) = kind {
                order(kind).map_err(locate)?;
            }
            let line = parse_line(&tokens).map_err(locate)?;
            if line == Line::Blank {
                match blank_lines {
                    BlankLines::Ignore => continue,
                    BlankLines::Reject => {
                        return Err(locate(ErrorKind::UnknownLineKind(String::new())))
                    }
                }
            }
            if let Some(value) = visit(number, line).map_err(locate)? {
                return Ok(Some(value));
            }
        }
    }

    fn check_edge_count(&self, header: &Header, num_arcs: usize) -> Result<()> {
        if header.edge_count == num_arcs {
            return Ok(());
        }
        match self.options.edge_count_policy {
            EdgeCountPolicy::Advisory => {
                warn!(
                    "{}:{}: problem declares {} edges but {} were read",
                    self.path.display(),
                    header.line,
                    header.edge_count,
                    num_arcs
                );
                Ok(())
            }
            EdgeCountPolicy::Strict => Err(Error::new(
                self.path,
                ErrorKind::EdgeCountMismatch {
                    declared: header.edge_count,
                    actual: num_arcs,
                },
            )
            .at(header.line)
            .on(Some(LineKind::Problem))),
        }
    }
}

/// Exclusive prefix sum: `degrees.len() + 1` offsets starting at 0.
fn prefix_sum(degrees: &[usize]) -> Vec<usize> {
    std::iter::once(0)
        .chain(degrees.iter().scan(0, |sum, &degree| {
            *sum += degree;
            Some(*sum)
        }))
        .collect()
}

/// A zeroed buffer of `len` counters, or `None` if it cannot be allocated.
fn zeroed(len: usize) -> Option<Vec<usize>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, 0);
    Some(buf)
}

fn input_changed() -> ErrorKind {
    ErrorKind::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        "input changed between passes",
    ))
}
