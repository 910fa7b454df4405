use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Custom error type for parsing course codes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseCourseCodeError {
    EmptyInput,
    MissingDepartment,
    MalformedNumber,
}

impl Display for ParseCourseCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyInput => write!(f, "Empty input string"),
            Self::MissingDepartment => write!(f, "No department abbreviation found"),
            Self::MalformedNumber => write!(f, "Course number is not exactly 3 digits"),
        }
    }
}

/// A fully-qualified course code: department abbreviation followed by a
/// 3-digit course number with no separator, e.g. `EE235` or `A&A310`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseCode {
    department: String,
    number: String,
}

impl CourseCode {
    /// Department abbreviation: uppercase letters and `&`, no digits
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The 3-digit course number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Course level, e.g. `300` for a 3xx course
    pub fn level(&self) -> u16 {
        self.number
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u16 * 100)
            .unwrap_or(0)
    }
}

impl FromStr for CourseCode {
    type Err = ParseCourseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCourseCodeError::EmptyInput);
        }

        let split = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
        let (department, number) = s.split_at(split);

        if department.is_empty() || !department.chars().all(|c| c.is_ascii_uppercase() || c == '&')
        {
            return Err(ParseCourseCodeError::MissingDepartment);
        }
        if number.len() != 3 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseCourseCodeError::MalformedNumber);
        }

        Ok(CourseCode {
            department: department.to_string(),
            number: number.to_string(),
        })
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.department, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_code_from_str() {
        let code = CourseCode::from_str("EE235").unwrap();
        assert_eq!(code.department(), "EE");
        assert_eq!(code.number(), "235");
        assert_eq!(code.to_string(), "EE235");

        let code = CourseCode::from_str("A&A310").unwrap();
        assert_eq!(code.department(), "A&A");
        assert_eq!(code.level(), 300);
    }

    #[test]
    fn test_course_code_errors() {
        assert_eq!(
            CourseCode::from_str(""),
            Err(ParseCourseCodeError::EmptyInput)
        );
        assert_eq!(
            CourseCode::from_str("235"),
            Err(ParseCourseCodeError::MissingDepartment)
        );
        assert_eq!(
            CourseCode::from_str("ee235"),
            Err(ParseCourseCodeError::MissingDepartment)
        );
        assert_eq!(
            CourseCode::from_str("MATH12"),
            Err(ParseCourseCodeError::MalformedNumber)
        );
        assert_eq!(
            CourseCode::from_str("MATH1244"),
            Err(ParseCourseCodeError::MalformedNumber)
        );
    }
}
