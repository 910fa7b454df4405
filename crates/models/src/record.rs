use crate::{campus::Campus, quarter::OfferedQuarters, requisite::RequisiteExpression};
use serde::Serialize;

/// One course entry assembled from a catalog page
#[derive(Debug, Clone, Serialize)]
pub struct CourseRecord {
    /// Campus the course is taught on
    pub campus: Campus,
    /// Department abbreviation, e.g. `EE`
    pub department: String,
    /// 3-digit course number, e.g. `235`
    pub number: String,
    /// Course title
    pub name: String,
    /// Credit annotation as printed in the catalog, e.g. `3-5` or `*`
    pub credits: String,
    /// Areas-of-knowledge credit types, comma-joined (I&S, DIV, NW, VLPA, QSR)
    pub areas: String,
    /// Quarters the course is offered in
    pub offered: OfferedQuarters,
    /// Course codes this course is offered jointly with, comma-joined
    pub jointly: String,
    pub prerequisites: RequisiteExpression,
    pub corequisites: RequisiteExpression,
    /// Normalized description text
    pub description: String,
}

impl CourseRecord {
    /// Unique course id: department abbreviation + course number, e.g. `EE235`
    pub fn course_id(&self) -> String {
        format!("{}{}", self.department, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id() {
        let record = CourseRecord {
            campus: Campus::Seattle,
            department: "EE".to_string(),
            number: "235".to_string(),
            name: "Continuous Time Linear Systems".to_string(),
            credits: "5".to_string(),
            areas: "NW".to_string(),
            offered: OfferedQuarters::default(),
            jointly: String::new(),
            prerequisites: RequisiteExpression::default(),
            corequisites: RequisiteExpression::default(),
            description: String::new(),
        };

        assert_eq!(record.course_id(), "EE235");
    }
}
