//! # Claim Parser
//!
//! Decodes the textual claim notation
//!
//! ```text
//! AttributeStatus(name=<name>, orgId=<orgId>, status=<status>)
//! ```
//!
//! repeated any number of times. Separators between claims are optional;
//! commas, semicolons, brackets and whitespace between them are ignored.
//! A claim with an empty field, or any other leftover text, is reported in
//! [`ParseOutcome::skipped`] and otherwise dropped.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::AttributeStatus;

lazy_static! {
    static ref CLAIM: Regex = Regex::new(
        r"AttributeStatus\(\s*name\s*=\s*([^,()]*?)\s*,\s*orgId\s*=\s*([^,()]*?)\s*,\s*status\s*=\s*([^,()]*?)\s*\)"
    )
    .expect("claim pattern is valid");
}

/// Result of decoding one claim list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Claims in input order.
    pub claims: Vec<AttributeStatus>,
    /// Fragments that did not decode to a claim.
    pub skipped: Vec<String>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decode `text` into claims. Never fails.
pub fn parse_claims(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut cursor = 0;

    for captures in CLAIM.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        note_gap(&text[cursor..whole.start()], &mut outcome.skipped);
        cursor = whole.end();

        let field = |i: usize| captures.get(i).map(|m| m.as_str().trim()).unwrap_or("");
        let (name, org_id, status) = (field(1), field(2), field(3));
        if name.is_empty() || org_id.is_empty() || status.is_empty() {
            outcome.skipped.push(whole.as_str().to_string());
            continue;
        }
        outcome
            .claims
            .push(AttributeStatus::new(name, org_id, status));
    }
    note_gap(&text[cursor..], &mut outcome.skipped);

    outcome
}

/// Canonical text form, the inverse of [`parse_claims`] for clean input.
pub fn render_claims(claims: &[AttributeStatus]) -> String {
    claims
        .iter()
        .map(|claim| claim.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn note_gap(gap: &str, skipped: &mut Vec<String>) {
    let residue = gap.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']'));
    if !residue.is_empty() {
        skipped.push(residue.to_string());
    }
}
