use thiserror::Error;

use super::ast::{Segment, Token};

// ── Syntax validation ──────────────────────────────────────────────────────

/// The validator's structured classification of a segment, computed once and
/// consumed by exactly one downstream executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxVerdict {
    /// At least one standalone `|` token is present.
    pub has_pipe: bool,
    /// A single validated output redirection, if present.
    pub redirect: Option<Redirect>,
}

/// Location of a validated output redirection inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Index of the token carrying the `>` character.
    pub op: usize,
    /// Index of the token naming the target file (always `op + 1`).
    pub target: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("redirection with no command to redirect")]
    RedirectFirst,
    #[error("more than one redirection in a segment")]
    MultipleRedirects,
    #[error("redirection without a target file")]
    MissingTarget,
    #[error("tokens after the redirection target")]
    TrailingTokens,
    #[error("pipe with no command on its left")]
    PipeFirst,
    #[error("pipe with no command on its right")]
    DanglingPipe,
    #[error("redirection before the final pipe")]
    RedirectBeforePipe,
}

/// Classify one non-empty segment. Two passes: the redirection scan first,
/// then the pipe scan (which needs to know where the redirection sits). The
/// first violation found wins.
pub fn inspect(segment: &Segment) -> Result<SyntaxVerdict, SyntaxError> {
    let redirect = scan_redirect(&segment.tokens)?;
    let has_pipe = scan_pipes(&segment.tokens, redirect.as_ref())?;
    Ok(SyntaxVerdict { has_pipe, redirect })
}

/// Find the output redirection, if any. Every `>` character counts, even
/// embedded in a larger token.
fn scan_redirect(tokens: &[Token]) -> Result<Option<Redirect>, SyntaxError> {
    let mut op = None;
    let mut count = 0;
    for (i, tok) in tokens.iter().enumerate() {
        for ch in tok.chars() {
            if ch == '>' {
                count += 1;
                if count > 1 {
                    return Err(SyntaxError::MultipleRedirects);
                }
                if i == 0 {
                    return Err(SyntaxError::RedirectFirst);
                }
                op = Some(i);
            }
        }
    }

    match op {
        None => Ok(None),
        Some(op) => {
            let target = op + 1;
            if target >= tokens.len() {
                return Err(SyntaxError::MissingTarget);
            }
            if target + 1 < tokens.len() {
                return Err(SyntaxError::TrailingTokens);
            }
            Ok(Some(Redirect { op, target }))
        }
    }
}

/// Find standalone `|` tokens and check their neighbours. A redirection is
/// only legal on the final stage, so one sitting before the last pipe is
/// malformed.
fn scan_pipes(tokens: &[Token], redirect: Option<&Redirect>) -> Result<bool, SyntaxError> {
    let mut last_pipe = None;
    for (i, tok) in tokens.iter().enumerate() {
        if tok.as_str() == "|" {
            if i == 0 {
                return Err(SyntaxError::PipeFirst);
            }
            if i + 1 == tokens.len() {
                return Err(SyntaxError::DanglingPipe);
            }
            last_pipe = Some(i);
        }
    }

    if let (Some(pipe), Some(redirect)) = (last_pipe, redirect)
        && redirect.op < pipe
    {
        return Err(SyntaxError::RedirectBeforePipe);
    }

    Ok(last_pipe.is_some())
}
