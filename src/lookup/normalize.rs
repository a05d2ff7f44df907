//! City name normalization used to build summary lookup keys

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and tidy whitespace.
///
/// Performs:
/// - Unicode NFD decomposition
/// - removal of combining diacritical marks (U+0300..=U+036F)
/// - trimming and collapsing of whitespace runs (byte order marks included)
///   to a single space
///
/// ```
/// use pollution_enricher::lookup::normalize_city_name;
///
/// assert_eq!(normalize_city_name("Kraków"), "Krakow");
/// assert_eq!(normalize_city_name("  São   Paulo "), "Sao Paulo");
/// ```
pub fn normalize_city_name(name: &str) -> String {
    let stripped: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();

    stripped
        .split(is_blank)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace as far as city names go: Unicode whitespace plus U+FEFF.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
