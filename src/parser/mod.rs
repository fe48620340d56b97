mod ast;
mod lexer;
mod verdict;

pub use ast::{PipelineStage, Segment, Token};
pub use verdict::{Redirect, SyntaxError, SyntaxVerdict, inspect};

// ── Public API ────────────────────────────────────────────────────────────

/// Break one raw input line into its command segments: tokenize on
/// whitespace, then split on literal `;` tokens. Always returns at least one
/// segment; segments may be empty and are skipped by the dispatch loop.
pub fn parse_line(line: &str) -> Vec<Segment> {
    lexer::split_segments(lexer::tokenize(line))
}
