//! Extraction of the quarters a course is offered in from catalog prose.

use lazy_static::lazy_static;
use models::quarter::{OfferedQuarters, Quarter};
use regex::Regex;

lazy_static! {
    static ref COURSE_PARTS: Regex = Regex::new(r"[A-Z& ]+\d+").unwrap();
}

/// Reads the trailing `Offered:` annotation of a course description and
/// returns the quarters it names.
///
/// The annotation packs quarter symbols back to back (`AWSpS`), sometimes
/// after a `jointly with ...;` segment. Course codes are removed first so
/// their capitals cannot masquerade as quarter symbols, then symbols are
/// matched greedily in catalog order. Ordering matters: `Sp` must be
/// claimed before `S`, which [`Quarter::iter`] guarantees.
pub fn extract(description: &str) -> OfferedQuarters {
    let mut offered = OfferedQuarters::default();
    let Some(idx) = description.rfind("Offered:") else {
        return offered;
    };

    let annotation = &description[idx + "Offered:".len()..];
    let annotation = if annotation.contains(';') {
        annotation.split(';').nth(1).unwrap_or("")
    } else {
        annotation
    };
    let mut symbols = COURSE_PARTS.replace_all(annotation, "").into_owned();

    for quarter in Quarter::all() {
        let symbol = quarter.as_str();
        if symbols.contains(symbol) {
            offered.push(quarter);
            symbols = symbols.replacen(symbol, "", 1);
        }
    }
    offered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_quarters() {
        let offered = extract("Basic chemistry. Offered: AWSpS.");
        assert_eq!(offered.to_string(), "A,W,Sp,S");
    }

    #[test]
    fn test_spring_only() {
        let offered = extract("Field methods. Offered: Sp.");
        assert_eq!(offered.to_string(), "Sp");
        assert!(offered.contains(Quarter::Spring));
        assert!(!offered.contains(Quarter::Summer));
    }

    #[test]
    fn test_missing_annotation() {
        let offered = extract("No quarters listed here.");
        assert!(offered.is_empty());
    }

    #[test]
    fn test_jointly_segment_is_skipped() {
        // The part before the semicolon names joint courses, not quarters
        let offered = extract("Studio practice. Offered: jointly with ART 382; AW.");
        assert_eq!(offered.to_string(), "A,W");
    }

    #[test]
    fn test_course_codes_do_not_leak_symbols() {
        // "SPAN 103" would otherwise contribute both "Sp" and "A"
        let offered = extract("Offered: jointly with SPAN 103; W.");
        assert_eq!(offered.to_string(), "W");
    }

    #[test]
    fn test_order_is_catalog_order() {
        let offered = extract("Offered: SSpWA.");
        assert_eq!(offered.to_string(), "A,W,Sp,S");
    }
}
