use super::verdict::SyntaxVerdict;

// ── Parse-level types ──────────────────────────────────────────────────────

/// One whitespace-delimited word of the input line. No quoting, no escaping.
pub type Token = String;

/// One semicolon-delimited unit of the input line, potentially a multi-stage
/// pipeline with an optional trailing redirection.
///
/// A segment may be empty (consecutive `;` separators produce them); empty
/// segments are skipped by the dispatch loop, never validated or executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub tokens: Vec<Token>,
}

/// One program invocation within a pipeline segment: the argument vector for
/// a single process, sliced out of its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage<'a> {
    pub argv: &'a [Token],
}

impl Segment {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Slice the segment into its pipeline stages at each standalone `|`
    /// token, truncating the final stage at the redirection operator when
    /// the verdict found one.
    pub fn stages(&self, verdict: &SyntaxVerdict) -> Vec<PipelineStage<'_>> {
        let end = verdict
            .redirect
            .as_ref()
            .map_or(self.tokens.len(), |redirect| redirect.op);
        self.tokens[..end]
            .split(|tok| tok.as_str() == "|")
            .map(|argv| PipelineStage { argv })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{inspect, lexer};
    use super::*;

    fn seg(line: &str) -> Segment {
        Segment::new(lexer::tokenize(line))
    }

    #[test]
    fn plain_segment_is_one_stage() {
        let segment = seg("ls -la");
        let verdict = inspect(&segment).unwrap();
        let stages = segment.stages(&verdict);
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].argv, ["ls", "-la"]);
    }

    #[test]
    fn pipes_split_into_ordered_stages() {
        let segment = seg("a -x | b | c");
        let verdict = inspect(&segment).unwrap();
        let stages = segment.stages(&verdict);
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].argv, ["a", "-x"]);
        assert_eq!(stages[1].argv, ["b"]);
        assert_eq!(stages[2].argv, ["c"]);
    }

    #[test]
    fn final_stage_stops_at_redirect_operator() {
        let segment = seg("a | b > out.txt");
        let verdict = inspect(&segment).unwrap();
        let stages = segment.stages(&verdict);
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[1].argv, ["b"]);
    }

    #[test]
    fn empty_stage_between_pipes_is_preserved() {
        // `a | | b` passes validation (every pipe has a neighbour token);
        // the empty middle stage fails later, at spawn time.
        let segment = seg("a | | b");
        let verdict = inspect(&segment).unwrap();
        let stages = segment.stages(&verdict);
        assert_eq!(stages.len(), 3);
        assert!(stages[1].argv.is_empty());
    }
}
