/// What to do when the problem's edge count differs from the arcs read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCountPolicy {
    /// The declared count is a hint; a mismatch is only logged.
    Advisory,
    /// A mismatch fails the read.
    Strict,
}

impl Default for EdgeCountPolicy {
    fn default() -> Self {
        EdgeCountPolicy::Advisory
    }
}

/// What to do with lines holding no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLines {
    /// A blank line is an unknown line kind.
    Reject,
    Ignore,
}

impl Default for BlankLines {
    fn default() -> Self {
        BlankLines::Reject
    }
}

/// Settings of a [`DimacsReader`](super::DimacsReader).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub edge_count_policy: EdgeCountPolicy,
    pub blank_lines: BlankLines,
}
