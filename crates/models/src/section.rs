use serde::Serialize;

/// One physical meeting record extracted from a time-schedule table.
///
/// All fields are kept as the raw normalized strings from the schedule text:
/// `seats` is numeric-or-empty, `time` holds a compact `HHMM-HHMM` range
/// (optionally suffixed `P`) or is blank when the meeting is not yet
/// determined. A single catalog-listed section that meets at two different
/// day/time/location combinations yields two records sharing every field
/// except `days`, `time`, `building` and `room`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSection {
    pub course_name: String,
    pub seats: String,
    pub sln: String,
    pub section: String,
    pub kind: String,
    pub days: String,
    pub time: String,
    pub building: String,
    pub room: String,
}

impl ScheduleSection {
    /// Whether the meeting slot is still to be arranged (no usable
    /// day/time/location quadruple)
    pub fn is_arranged(&self) -> bool {
        self.days.is_empty() && self.time.is_empty()
    }

    /// Whether two records describe different meetings of the same section
    pub fn same_section(&self, other: &ScheduleSection) -> bool {
        self.course_name == other.course_name
            && self.seats == other.seats
            && self.sln == other.sln
            && self.section == other.section
            && self.kind == other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_arranged() {
        let mut section = ScheduleSection::default();
        assert!(section.is_arranged());

        section.days = "MWF".to_string();
        section.time = "930-1020".to_string();
        assert!(!section.is_arranged());
    }

    #[test]
    fn test_same_section() {
        let first = ScheduleSection {
            course_name: "CHEM142".to_string(),
            seats: "24".to_string(),
            sln: "12345".to_string(),
            section: "A".to_string(),
            kind: "QZ".to_string(),
            days: "MWF".to_string(),
            time: "930-1020".to_string(),
            building: "BAG".to_string(),
            room: "154".to_string(),
        };

        let mut second = first.clone();
        second.days = "Th".to_string();
        second.time = "1030-1120".to_string();
        second.building = "CHB".to_string();
        second.room = "102".to_string();

        assert!(first.same_section(&second));

        second.sln = "54321".to_string();
        assert!(!first.same_section(&second));
    }
}
