//! Marking-scheme parsing: which phrasings of an answer are accepted.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, digit1, space0},
    combinator::recognize,
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};
use tracing::debug;
use vocab_protocol::AnswerVariations;

const ACCEPT_MARKER: &str = "Accept:";
const REJECT_MARKER: &str = "Do NOT";

/// `"12. "`: the numeric index of an enumerated answer item.
fn item_index(input: &str) -> IResult<&str, &str> {
    terminated(recognize(pair(space0, digit1)), pair(char('.'), space0))(input)
}

/// Split `"student(s)"` into `("student", "s")`. Only a parenthesized
/// group at the very end counts.
fn paren_suffix(input: &str) -> IResult<&str, (&str, &str)> {
    tuple((
        take_until("("),
        delimited(tag("("), take_while1(|c: char| c.is_alphabetic()), tag(")")),
    ))(input)
}

pub fn split_paren_suffix(part: &str) -> Option<(String, String)> {
    match paren_suffix(part.trim()) {
        Ok(("", (base, suffix))) if !base.trim().is_empty() => {
            let base = base.trim_end();
            Some((base.to_string(), format!("{base}{suffix}")))
        }
        _ => None,
    }
}

fn accept_variants(line: &str) -> Vec<String> {
    let Some((_, rest)) = line.split_once(ACCEPT_MARKER) else {
        return Vec::new();
    };
    rest.split(['/', ','])
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.contains(['(', ')']))
        .map(str::to_string)
        .collect()
}

fn enumerated_variants(line: &str) -> Option<Vec<String>> {
    let (body, _) = item_index(line).ok()?;
    let body = body.split_once(ACCEPT_MARKER).map_or(body, |(before, _)| before).trim();
    if body.is_empty() {
        return None;
    }

    if !body.contains('/') {
        return Some(vec![body.to_string()]);
    }

    let mut variants = Vec::new();
    for part in body.split('/').map(str::trim).filter(|p| !p.is_empty()) {
        match split_paren_suffix(part) {
            Some((base, suffixed)) => {
                variants.push(base);
                variants.push(suffixed);
            }
            None => variants.push(part.to_string()),
        }
    }
    Some(variants)
}

/// Build the variation map for one answer file.
///
/// Every variant found on a line joins one group, and each member's
/// lowercase form keys the whole group.
pub fn parse_answer_variations(text: &str) -> AnswerVariations {
    let mut variations = AnswerVariations::new();

    for line in text.lines() {
        let variants = if line.contains(ACCEPT_MARKER) && !line.contains(REJECT_MARKER) {
            accept_variants(line)
        } else {
            enumerated_variants(line).unwrap_or_default()
        };

        if !variants.is_empty() {
            variations.insert_group(variants);
        }
    }

    debug!(keys = variations.len(), "answer variations parsed");
    variations
}
