use std::mem;

use nom::{
    IResult, Parser,
    bytes::complete::is_not,
    character::complete::multispace0,
    multi::many0,
    sequence::preceded,
};

use super::ast::{Segment, Token};

// ── Tokenizer ──────────────────────────────────────────────────────────────

fn token(input: &str) -> IResult<&str, Token> {
    let (input, tok) = preceded(multispace0, is_not(" \t\r\n")).parse(input)?;
    Ok((input, tok.to_string()))
}

/// Split a raw input line into whitespace-delimited tokens. Empty and
/// whitespace-only lines yield no tokens, which the caller treats as
/// "nothing to do".
pub fn tokenize(line: &str) -> Vec<Token> {
    match many0(token).parse(line) {
        Ok((_rest, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}

// ── Segmenter ──────────────────────────────────────────────────────────────

/// Split a token sequence into segments on each literal `;` token. Segments
/// may be empty; the dispatch loop skips those silently. Only a standalone
/// `;` separates — `ls;` is one ordinary token.
pub fn split_segments(tokens: Vec<Token>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment::default();
    for tok in tokens {
        if tok == ";" {
            segments.push(mem::take(&mut current));
        } else {
            current.tokens.push(tok);
        }
    }
    segments.push(current);
    segments
}
