use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// One of the four academic quarters
///
/// The declaration order `A, W, Sp, S` is load-bearing: offered-quarter
/// scanning must check `Sp` before `S` so a bare `S` never matches inside an
/// unconsumed `Sp` token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum Quarter {
    #[strum(serialize = "A", props(full = "autumn", code = "AUT"))]
    Autumn,
    #[strum(serialize = "W", props(full = "winter", code = "WIN"))]
    Winter,
    #[strum(serialize = "Sp", props(full = "spring", code = "SPR"))]
    Spring,
    #[strum(serialize = "S", props(full = "summer", code = "SUM"))]
    Summer,
}

impl Quarter {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Three-letter code used in time-schedule URLs, e.g. `AUT`
    pub fn code(&self) -> &'static str {
        self.get_str("code").unwrap_or_default()
    }

    pub fn all() -> Vec<Quarter> {
        Quarter::iter().collect()
    }
}

/// An ordered subset of the four quarters, in domain order, each quarter
/// appearing at most once. Rendered as a comma-joined string, e.g. `A,W,Sp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OfferedQuarters(Vec<Quarter>);

impl OfferedQuarters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, quarter: Quarter) {
        if !self.0.contains(&quarter) {
            self.0.push(quarter);
        }
    }

    pub fn contains(&self, quarter: Quarter) -> bool {
        self.0.contains(&quarter)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Quarter> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for OfferedQuarters {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Self::new();
        for token in s.split(',').filter(|t| !t.is_empty()) {
            result.push(Quarter::from_str(token.trim())?);
        }
        Ok(result)
    }
}

impl Display for OfferedQuarters {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for quarter in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", quarter.as_str())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_domain_order() {
        let all = Quarter::all();
        let order: Vec<&str> = all.iter().map(|q| q.as_str()).collect();
        assert_eq!(order, vec!["A", "W", "Sp", "S"]);
    }

    #[test]
    fn test_quarter_codes() {
        assert_eq!(Quarter::Autumn.code(), "AUT");
        assert_eq!(Quarter::Spring.code(), "SPR");
    }

    #[test]
    fn test_offered_quarters_display() {
        let mut offered = OfferedQuarters::new();
        offered.push(Quarter::Autumn);
        offered.push(Quarter::Spring);
        // Duplicates are ignored
        offered.push(Quarter::Autumn);

        assert_eq!(offered.to_string(), "A,Sp");
    }

    #[test]
    fn test_offered_quarters_from_str() {
        let offered = OfferedQuarters::from_str("A,W,Sp,S").unwrap();
        assert_eq!(offered.to_string(), "A,W,Sp,S");

        assert!(OfferedQuarters::from_str("A,X").is_err());
        assert!(OfferedQuarters::from_str("").unwrap().is_empty());
    }
}
