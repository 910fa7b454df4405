//! Extraction of meeting-time rows from raw time-schedule text blobs.
//!
//! One blob is the flattened text of one course line in a schedule table.
//! It yields zero, one or two [`ScheduleSection`] rows: two when the line
//! carries a second day/time/building/room quadruple for the same section.

use lazy_static::lazy_static;
use models::section::ScheduleSection;
use regex::Regex;

lazy_static! {
    static ref SEAT_COUNTS: Regex = Regex::new(r"\d+ */ *\d+[A-Z]?").unwrap();
    static ref LETTERS: Regex = Regex::new(r"[A-Za-z]+").unwrap();
    static ref EXTRA_MEETING: Regex =
        Regex::new(r"[MTWhF]+\s+\d+-\d+P?\s+[A-Z\d]+\s+[A-Za-z/+\-\d]+").unwrap();
    static ref CREDIT_LIKE: Regex = Regex::new(r"[*,\[\]\.max\d/ \-]+|VAR").unwrap();
    static ref ANY_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// Splits one schedule text blob into its meeting rows.
///
/// Returns an empty vector when the blob does not carry at least the five
/// leading fields (sln, section letter and type after the name and seat
/// count). A second quadruple after the seat counts yields a second row
/// sharing the first five fields with the primary row.
pub fn extract_sections(raw_text: &str, course_name: &str) -> Vec<ScheduleSection> {
    let text = raw_text
        .replace('\n', "")
        .replace('\r', "")
        .replacen('>', "", 1)
        .replace("Open", "")
        .replace("Closed", "")
        .replacen("Restr", "", 1)
        .replace("IS", "");
    let text = text.trim();

    // Enrollment counts split the line: meeting fields before, notes and any
    // second quadruple after
    let counts = SEAT_COUNTS.find(text);
    let (head, tail) = match counts {
        Some(ref m) => (&text[..m.start()], Some(&text[m.end()..])),
        None => (text, None),
    };
    let seats = counts.as_ref().map(|m| {
        let capacity = m
            .as_str()
            .split_once('/')
            .map_or(m.as_str(), |(_, after)| after);
        LETTERS.replace_all(capacity.trim(), "").into_owned()
    });

    // The trailing tokens of the head are instructor fragments, not fields
    let head = head.rsplit_once(',').map_or(head, |(left, _)| left);
    let head = head.rsplit_once(' ').map_or(head, |(left, _)| left).trim();

    let mut fields: Vec<String> = std::iter::once(course_name.to_uppercase())
        .chain(seats)
        .chain(head.split_whitespace().map(str::to_string))
        .filter(|field| !field.is_empty())
        .collect();
    fields.truncate(9);
    if fields.len() < 5 {
        return Vec::new();
    }

    // A credits-like token in the type slot marks the lecture row itself
    if CREDIT_LIKE.is_match(&fields[4]) {
        fields[4] = "LECT".to_string();
    }
    if fields.join(",").contains("to,be,arranged") {
        let len = fields.len();
        for field in &mut fields[len - 3..] {
            field.clear();
        }
    }
    for field in &mut fields {
        if *field == "*" || *field == "to" {
            field.clear();
        }
    }

    let mut rows = vec![section_from(&fields)];
    if let Some(tail) = tail {
        if let Some(extra) = EXTRA_MEETING.find(tail) {
            let quad: Vec<&str> = extra.as_str().split_whitespace().collect();
            if quad.len() == 4 {
                let mut second = rows[0].clone();
                second.days = quad[0].to_string();
                second.time = quad[1].to_string();
                second.building = quad[2].to_string();
                second.room = quad[3].to_string();
                rows.push(second);
            }
        }
    }

    // A room with no digit means the quadruple is not a real meeting slot yet
    for row in &mut rows {
        if !ANY_DIGIT.is_match(&row.room) {
            row.days.clear();
            row.time.clear();
            row.building.clear();
            row.room.clear();
        }
    }
    rows
}

fn section_from(fields: &[String]) -> ScheduleSection {
    let field = |i: usize| fields.get(i).cloned().unwrap_or_default();
    ScheduleSection {
        course_name: field(0),
        seats: field(1),
        sln: field(2),
        section: field(3),
        kind: field(4),
        days: field(5),
        time: field(6),
        building: field(7),
        room: field(8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_meeting_row() {
        let rows = extract_sections(
            "Open  12345 A QZ MWF 930-1020 BAG 154      24/150      Staff",
            "chem 142",
        );

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.course_name, "CHEM 142");
        assert_eq!(row.seats, "150");
        assert_eq!(row.sln, "12345");
        assert_eq!(row.section, "A");
        assert_eq!(row.kind, "QZ");
        assert_eq!(row.days, "MWF");
        assert_eq!(row.time, "930-1020");
        assert_eq!(row.building, "BAG");
        assert_eq!(row.room, "154");
    }

    #[test]
    fn test_second_quadruple_yields_two_rows() {
        let rows = extract_sections(
            "Open  12345 A QZ MWF 930-1020 BAG 154      24/150      Th 1030-1120 CHB 102",
            "chem 142",
        );

        assert_eq!(rows.len(), 2);
        assert!(rows[0].same_section(&rows[1]));
        assert_eq!(rows[0].days, "MWF");
        assert_eq!(rows[1].days, "Th");
        assert_eq!(rows[1].time, "1030-1120");
        assert_eq!(rows[1].building, "CHB");
        assert_eq!(rows[1].room, "102");
    }

    #[test]
    fn test_credits_token_marks_lecture() {
        let rows = extract_sections(
            "Open  18208 A 5 MWF 130-220 KNE 130      96/100      Staff",
            "phys 121",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "LECT");
        assert_eq!(rows[0].seats, "100");
    }

    #[test]
    fn test_to_be_arranged_blanks_meeting_fields() {
        let rows = extract_sections(
            "Open  14210 A 3 to be arranged      10/15      Staff",
            "cse 601",
        );

        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_arranged());
        assert_eq!(rows[0].sln, "14210");
        assert_eq!(rows[0].building, "");
        assert_eq!(rows[0].room, "");
    }

    #[test]
    fn test_asterisk_placeholder_is_blanked() {
        let rows = extract_sections(
            "Open  11514 A LC TTh 130-320P * *      40/40      Staff",
            "art 201",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].building, "");
        assert_eq!(rows[0].room, "");
        // A blanked room voids the whole quadruple
        assert_eq!(rows[0].days, "");
        assert_eq!(rows[0].time, "");
    }

    #[test]
    fn test_room_without_digit_voids_quadruple() {
        let rows = extract_sections(
            "Open  19028 A LC TTh 130-320P OUG ARR      40/40      Staff",
            "engl 131",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sln, "19028");
        assert!(rows[0].is_arranged());
        assert_eq!(rows[0].building, "");
        assert_eq!(rows[0].room, "");
    }

    #[test]
    fn test_tab_separated_fields_are_split() {
        let rows = extract_sections(
            "Open  12345 A QZ MWF\t930-1020 BAG 154      24/150      Staff",
            "chem 142",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].days, "MWF");
        assert_eq!(rows[0].time, "930-1020");
        assert_eq!(rows[0].room, "154");
    }

    #[test]
    fn test_short_blob_yields_nothing() {
        assert!(extract_sections("Open  12345 A", "cse 142").is_empty());
        assert!(extract_sections("", "cse 142").is_empty());
    }

    #[test]
    fn test_capacity_letter_suffix_is_stripped() {
        let rows = extract_sections(
            "Open  12345 A QZ MWF 930-1020 BAG 154      24/150E      Staff",
            "chem 142",
        );

        assert_eq!(rows[0].seats, "150");
    }
}
