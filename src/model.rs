use std::fmt;

/// One alternate build as returned by the upstream catalog. Immutable once
/// fetched; every optional upstream field has a defined default here so the
/// rest of the bot never inspects untyped JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: String,
    pub designer: String,
    pub num_parts: Option<u32>,
    pub url: Option<String>,
    pub has_instructions: bool,
}

/// A validated set number: exactly one `-`, decimal digits on both sides
/// (`77244-1`). Anything else is rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNum(String);

impl SetNum {
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (set, variant) = trimmed.split_once('-')?;
        if set.is_empty() || variant.is_empty() {
            return None;
        }
        let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !digits(set) || !digits(variant) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces the raw listing sequence to the display list. Identity when
/// `pdf_only` is off; otherwise keeps only listings with building
/// instructions, preserving upstream order.
pub fn filter_listings(listings: &[Listing], pdf_only: bool) -> Vec<Listing> {
    if !pdf_only {
        return listings.to_vec();
    }
    listings
        .iter()
        .filter(|l| l.has_instructions)
        .cloned()
        .collect()
}
