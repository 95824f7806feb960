//! Wheel size guide and the age-based size calculator.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeGuideEntry {
    pub age: String,
    pub height: String,
    pub size: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeRecommendation {
    pub size: &'static str,
    pub details: &'static str,
}

/// Recommend a wheel size from a free-text age ("5", "5 ans").
///
/// Reads an optionally signed leading integer, saturating on overflow; `None`
/// when there are no digits. Negative ages fall in the smallest band.
pub fn recommend_size(age: &str) -> Option<SizeRecommendation> {
    let years = leading_integer(age)?;
    let (size, details) = match years {
        i64::MIN..=2 => ("12 pouces", "Pour les tout-petits (2-4 ans)"),
        3 => ("14 pouces", "Pour les jeunes enfants (3-5 ans)"),
        4..=6 => ("16 pouces", "Idéal (4-6 ans)"),
        7..=8 => ("20 pouces", "Pour les plus grands (5-8 ans)"),
        _ => ("24 pouces", "Enfants (7-10 ans)"),
    };
    Some(SizeRecommendation { size, details })
}

fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}
