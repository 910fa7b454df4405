//! Expansion of elliptical cross-listed course references in catalog prose.
//!
//! Catalog descriptions abbreviate joint listings two ways: slash-joined
//! department stems sharing one trailing number (`"BIOL/CHEM 351"`) and
//! comma-joined numbers sharing one department stem (`"MATH 124, 125"`).
//! Both are rewritten into fully-qualified course codes so the downstream
//! requisite and offered-quarters extractors only ever see canonical codes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref THREE_WAY: Regex = Regex::new(r"[A-Z& ]+/[A-Z& ]+/[A-Z& ]+\d+").unwrap();
    static ref TWO_WAY: Regex = Regex::new(r"[A-Z& ]+/[A-Z& ]+\d+").unwrap();
    static ref SERIES_THREE: Regex = Regex::new(r"[A-Z& ]+\d+, ?\d{3}, ?\d{3}").unwrap();
    static ref SERIES_TWO: Regex = Regex::new(r"[A-Z& ]+\d+, ?\d{3}").unwrap();
    static ref DEPARTMENT: Regex = Regex::new(r"[A-Z& ]+").unwrap();
    static ref THREE_DIGITS: Regex = Regex::new(r"\d{3}").unwrap();
}

/// Rewrites every elliptical joint course listing in `description` into fully
/// expanded course codes, e.g. `"BIOL/CHEM 351"` -> `"BIOL351/CHEM351"` and
/// `"MATH 124, 125, 126"` -> `"MATH126"`.
///
/// Running the normalizer on its own output is a no-op: expanded codes have
/// digits adjacent to every `/`, so neither pattern family matches again.
pub fn normalize(description: &str) -> String {
    let mut description = description.to_string();

    let three_way = find_all(&THREE_WAY, &description);
    let two_way = find_all(&TWO_WAY, &description);
    if !two_way.is_empty() {
        for joint in longest_match_wins(three_way, two_way) {
            let stripped = joint.replace(' ', "");
            let Some(number) = THREE_DIGITS.find(&stripped) else {
                continue;
            };

            let completed: Vec<String> = DEPARTMENT
                .find_iter(&stripped)
                .map(|stem| format!("{}{}", stem.as_str(), number.as_str()))
                .collect();
            description = description.replacen(&joint, &format!(" {}", completed.join("/")), 1);
        }
    }

    let series_three = find_all(&SERIES_THREE, &description);
    let series_two = find_all(&SERIES_TWO, &description);
    if !series_two.is_empty() || !series_three.is_empty() {
        for series in longest_match_wins(series_three, series_two) {
            let stripped = series.replace(' ', "");
            // No department prefix found: leave the span untouched
            if let Some(department) = DEPARTMENT.find(&stripped) {
                let suffix = &stripped[stripped.len() - 3..];
                description = description.replacen(
                    &series,
                    &format!("{}{}", department.as_str(), suffix),
                    1,
                );
            }
        }
    }

    description
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Merges the two match sets, discarding any shorter match contained in a
/// longer one (longest-match-wins)
fn longest_match_wins(longer: Vec<String>, shorter: Vec<String>) -> Vec<String> {
    let mut result = longer;
    let kept: Vec<String> = shorter
        .into_iter()
        .filter(|s| !result.iter().any(|l| l.contains(s.as_str())))
        .collect();
    result.extend(kept);
    result
}
