use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The literal appended to an expression when the catalog prose mentions that
/// instructor permission can satisfy (part of) a requirement
pub const POI: &str = "POI";

/// The two requisite labels recognized in catalog prose
///
/// Using an enum instead of a raw label string makes an out-of-contract label
/// unrepresentable at the library boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequisiteKind {
    Prerequisite,
    Corequisite,
}

impl RequisiteKind {
    /// The exact label literal as it appears in course descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prerequisite => "Prerequisite:",
            Self::Corequisite => "Co-requisite",
        }
    }
}

/// A normalized boolean formula over course codes
///
/// The grammar uses four textual operators:
/// - `;` separates clauses; every clause must be satisfied,
/// - `,` separates options within a clause; any one option satisfies it,
/// - `&&` joins courses that are all required within one option,
/// - `/` joins courses of which any one fills a single requirement slot.
///
/// A fully normalized expression contains no duplicate clauses and no stray
/// leading/trailing operator characters; the literal suffix `POI` may appear
/// as a final option when instructor permission applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequisiteExpression(String);

impl RequisiteExpression {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `;`-separated clauses of the expression
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        self.0.split(';').filter(|clause| !clause.is_empty())
    }

    /// Whether instructor permission is mentioned as a way to satisfy (part
    /// of) the requirement
    pub fn permits_instructor_override(&self) -> bool {
        self.clauses()
            .any(|clause| clause.split(',').any(|option| option == POI))
    }

    /// Evaluates the formula against a set of completed course codes.
    ///
    /// Every clause must be satisfied; a clause is satisfied by any one of its
    /// comma options; an option holds when all of its `&&` pieces hold; a
    /// piece holds when any one course of its `/` group was completed. The
    /// `POI` option only counts if the caller includes `"POI"` in `completed`
    /// to signal that permission was granted.
    pub fn is_satisfied_by(&self, completed: &[&str]) -> bool {
        self.clauses().all(|clause| {
            clause
                .split(',')
                .filter(|option| !option.is_empty())
                .any(|option| {
                    option
                        .split("&&")
                        .filter(|piece| !piece.is_empty())
                        .all(|piece| piece.split('/').any(|code| completed.contains(&code)))
                })
        })
    }
}

impl From<String> for RequisiteExpression {
    fn from(expression: String) -> Self {
        Self(expression)
    }
}

impl Display for RequisiteExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
