//! Extraction of prerequisite and corequisite formulas from catalog prose.
//!
//! The input is a course description already run through
//! [`crate::description::normalize`], so every course reference is a
//! fully-qualified code. The prose connectives (`and`, `or`, `either`,
//! `with either`, parentheticals) are rewritten step by step into the
//! compact operator grammar of [`RequisiteExpression`], then course codes
//! are extracted and the operator string is scrubbed of duplicates and
//! stray separators.

use lazy_static::lazy_static;
use models::requisite::{POI, RequisiteExpression, RequisiteKind};
use regex::Regex;

lazy_static! {
    static ref NOT_OPEN: Regex = Regex::new(r"[Nn]ot open to students").unwrap();
    static ref CO_REQ_LABEL: Regex = Regex::new(r"[Cc]o-?[Rr]equisites?").unwrap();
    static ref NO_CREDIT_IF: Regex = Regex::new(
        r"([Cc]annot|[Mm]ay not) be taken for credit if (credit received for|student has taken)?[A-Z& ]+\d{3}"
    )
    .unwrap();
    static ref SLASH_TRIPLE_AND: Regex =
        Regex::new(r"[A-Z& ]+\d{3}/[A-Z& ]+\d{3}/[A-Z& ]+\d{3} and").unwrap();
    static ref COURSE_CODE: Regex = Regex::new(r"[A-Z& ]{2,}\d{3}").unwrap();
    static ref AMPERSAND_RUN: Regex = Regex::new(r"&{3,}").unwrap();
}

/// Extracts the requisite formula of the given `kind` from a normalized
/// course description.
///
/// Returns the empty expression when the description carries no label of
/// that kind. Malformed prose degrades to a partial or empty formula, never
/// to an error.
pub fn extract(description: &str, kind: RequisiteKind) -> RequisiteExpression {
    let label = kind.label();
    if !description.contains(label) {
        return RequisiteExpression::default();
    }

    // Uniform lowercase connectives; "; or" chains and "either"/"one of"
    // phrasings become explicit operator boundaries before anything else
    let text = description
        .replace(" AND ", " and ")
        .replace(" OR ", " or ")
        .replace("; or", "/")
        .replace("and either", ";")
        .replace("and one of", ";");
    let text = NO_CREDIT_IF.replace_all(&text, "").into_owned();

    // Scope to the requisite sentence: drop the trailing "Offered:" segment,
    // everything before the label, and any "not open to students" tail
    let before_offered = match text.rfind("Offered:") {
        Some(idx) => &text[..idx],
        None => text.as_str(),
    };
    let after_label = before_offered
        .split_once(label)
        .map(|(_, rest)| rest)
        .unwrap_or(before_offered);
    let mut text = NOT_OPEN
        .split(after_label)
        .next()
        .unwrap_or("")
        .to_string();

    // "X/Y/Z and ..." closes the slash group as its own clause
    if let Some(joint) = SLASH_TRIPLE_AND.find(&text).map(|m| m.as_str().to_string()) {
        let closed = format!("{};", &joint[..joint.len() - 4]);
        text = text.replacen(&joint, &closed, 1);
    }
    if kind == RequisiteKind::Prerequisite {
        text = CO_REQ_LABEL.split(&text).next().unwrap_or("").to_string();
    }

    let instructor_override = text.to_lowercase().contains("permission");

    // Parentheticals are commentary; ", and" turns each comma in its clause
    // into a clause boundary
    let clauses: Vec<String> = text
        .split('(')
        .next()
        .unwrap_or("")
        .split(';')
        .map(|clause| {
            if clause.contains(", and") {
                clause.replace(',', ";")
            } else {
                clause.to_string()
            }
        })
        .collect();
    let mut text = clauses.join(";");

    if text.contains("with either") {
        let parts: Vec<&str> = text.split("with either").collect();
        text = format!("{}&&{}", parts[0], parts[1].replace(" or ", "/"));
    }
    let text = text.replace(" and ", "&&").replace(" or ", ",");

    let mut clause_results: Vec<String> = Vec::new();
    for clause in text.split(';').filter(|c| !c.is_empty()) {
        let mut options: Vec<String> = Vec::new();
        for option in clause.split(',').filter(|o| !o.is_empty()) {
            let has_slash = option.contains('/');
            let has_all_of = option.contains("&&");
            if has_slash && !has_all_of {
                options.push(codes(option, "/").join("/"));
            } else if !has_slash && has_all_of {
                options.push(codes(option, "&&").join("&&"));
            } else if has_slash && has_all_of {
                let groups: Vec<String> = option
                    .split("&&")
                    .filter(|piece| !piece.is_empty())
                    .map(|piece| codes(piece, "/").join("/"))
                    .collect();
                options.push(groups.join("&&"));
            } else if let Some(code) = COURSE_CODE.find(option) {
                options.push(code.as_str().to_string());
            }
        }
        let joined = options
            .into_iter()
            .filter(|o| !o.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        clause_results.push(joined);
    }

    let mut result = clause_results
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(";")
        .replace(' ', "");
    result = result
        .trim_matches(',')
        .trim_matches(';')
        .trim_matches('&')
        .replace(";,", ";");
    if instructor_override {
        result = format!("{result},{POI}");
    }

    result = AMPERSAND_RUN.replace_all(&result, "").into_owned();
    result = join_non_empty(&result, ',');
    result = join_non_empty(&result, ';');
    result = dedup_keep_first(&result, ',').replace(";&&", ";");
    result = result.trim_matches('&').to_string();
    result = dedup_keep_first(&result, ';');
    result = result
        .trim_matches(',')
        .trim_matches(';')
        .trim_matches('&')
        .replace(";,", ";")
        .trim()
        .to_string();

    // Orphaned operators left inside a clause collapse to the plainer form:
    // slash-only clauses are a flat choice, pure &&-chains are conjunct clauses
    let rewritten: Vec<String> = result
        .split(';')
        .map(|clause| {
            let has_slash = clause.contains('/');
            let has_all_of = clause.contains("&&");
            if has_slash && !has_all_of {
                clause.replace('/', ",")
            } else if !has_slash && has_all_of && !clause.contains(',') {
                clause.replace("&&", ";")
            } else {
                clause.to_string()
            }
        })
        .collect();

    RequisiteExpression::new(rewritten.join(";"))
}

/// First course code of every non-empty `separator` piece of `option`
fn codes(option: &str, separator: &str) -> Vec<String> {
    option
        .split(separator)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| COURSE_CODE.find(piece).map(|m| m.as_str().to_string()))
        .collect()
}

fn join_non_empty(text: &str, separator: char) -> String {
    text.split(separator)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Removes duplicate `separator` pieces, keeping first occurrences in order
fn dedup_keep_first(text: &str, separator: char) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for piece in text.split(separator) {
        if !kept.contains(&piece) {
            kept.push(piece);
        }
    }
    kept.join(&separator.to_string())
}
