//! Country guess from free-form summary text
//!
//! The guess is the last run of capitalised words in the description. It is
//! often a country, but can just as well be a region or a nationality.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::COUNTRY_NOT_FOUND;

static CAPITALISED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+(?:\s[A-Z][a-z]+)*").expect("capitalised-run pattern is valid")
});

/// Last capitalised word run in `description`, if any.
pub fn extract_country(description: &str) -> Option<&str> {
    CAPITALISED_RUN
        .find_iter(description)
        .last()
        .map(|m| m.as_str())
}

/// Like [`extract_country`], falling back to the "Country not found" sentinel.
pub fn country_or_sentinel(description: Option<&str>) -> String {
    description
        .and_then(extract_country)
        .unwrap_or(COUNTRY_NOT_FOUND)
        .to_string()
}
