//! Course catalog scraping: department page discovery and per-department
//! course record extraction.
//!
//! A catalog index page links every department page as a bare
//! `<letters>.html` file. Each department page lists one `<a name="...">`
//! anchor per course, holding the bolded title line and the description
//! prose the text parser works on.

use crate::util::normalize_whitespace;
use lazy_static::lazy_static;
use models::{
    campus::Campus, course_code::CourseCode, record::CourseRecord, requisite::RequisiteKind,
};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref BOLD: Selector = Selector::parse("b").unwrap();
    static ref ITALIC: Selector = Selector::parse("i").unwrap();
    static ref TITLE_HEAD: Regex = Regex::new(r"[^\(]+").unwrap();
    static ref AREA_TAGS: Regex = Regex::new(r"(I&S)|(DIV)|(NW)|(VLPA)|(QSR)").unwrap();
    static ref CREDITS_PAREN: Regex = Regex::new(r"\([*,\[\]\.max\d/ \-]+\)").unwrap();
    static ref JOINT_COURSE: Regex = Regex::new(r"[A-Z& ]+\d+").unwrap();
}

/// Collects the department page file names linked from a catalog index page,
/// first occurrence of each kept in page order
pub fn department_pages(index_html: &str) -> Vec<String> {
    let document = Html::parse_document(index_html);
    let mut seen = HashSet::new();
    let mut pages = Vec::new();

    for link in document.select(&ANCHOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains('/') && href.ends_with(".html") && seen.insert(href.to_string()) {
            pages.push(href.to_string());
        }
    }
    pages
}

/// Extracts every course record from one department catalog page.
///
/// Each `<a name="...">` anchor is one course: the anchor name is the course
/// id, the first `<b>` holds the title line (name, credits, area tags) and
/// the remaining anchor text is the description. The description is
/// normalized and handed to the requisite and offered-quarters extractors.
pub fn parse_department(html: &str, campus: Campus) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for course in document.select(&ANCHOR) {
        let Some(id) = course.value().attr("name") else {
            continue;
        };
        // Anchor names that are not course codes are navigation targets
        let Ok(code) = id.to_uppercase().parse::<CourseCode>() else {
            continue;
        };
        let Some(title_node) = course.select(&BOLD).next() else {
            continue;
        };
        let title: String = title_node.text().collect();

        let mut description = course.text().collect::<String>().replacen(&title, "", 1);
        if let Some(instructor) = course.select(&ITALIC).next() {
            let instructor: String = instructor.text().collect();
            description = description.replacen(&instructor, "", 1);
        }
        let description = match description.rfind("View course details in MyPlan") {
            Some(idx) => &description[..idx],
            None => description.as_str(),
        };
        let course_text = parser::description::normalize(&normalize_whitespace(description));

        let department = code.department().to_string();
        let number = code.number().to_string();

        let name = TITLE_HEAD
            .find(&title)
            .map(|m| {
                let head = m.as_str();
                let tail = head
                    .split_once(number.as_str())
                    .map_or(head, |(_, after)| after);
                tail.trim().to_string()
            })
            .unwrap_or_default();
        let credits = CREDITS_PAREN
            .find(&title)
            .map(|m| m.as_str()[1..m.as_str().len() - 1].to_string())
            .unwrap_or_default();
        let areas = AREA_TAGS
            .find_iter(&title)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let jointly = if course_text.contains("jointly with") {
            let segment = course_text
                .rsplit_once("jointly with ")
                .map_or("", |(_, after)| after);
            let segment = segment.rsplit_once(';').map_or(segment, |(before, _)| before);
            JOINT_COURSE
                .find_iter(segment)
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(",")
                .replace(' ', "")
        } else {
            String::new()
        };

        records.push(CourseRecord {
            campus,
            department,
            number,
            name,
            credits,
            areas,
            offered: parser::offered::extract(&course_text),
            jointly,
            prerequisites: parser::requisites::extract(&course_text, RequisiteKind::Prerequisite),
            corequisites: parser::requisites::extract(&course_text, RequisiteKind::Corequisite),
            description: course_text,
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_PAGE: &str = r##"<html><body>
        <a href="chem.html">Chemistry (CHEM)</a>
        <a href="math.html">Mathematics (MATH)</a>
        <a href="chem.html">Chemistry again</a>
        <a href="other/art.html">Art</a>
        <a href="#top">Back to top</a>
    </body></html>"##;

    const DEPT_PAGE: &str = r#"<html><body>
        <a name="chem142"><b>CHEM 142 General Chemistry (5) NW, QSR</b>
        Introduction to atomic nature of matter. Prerequisite: either CHEM 110
        or CHEM 120. Offered: AWSpS.
        <i>View course details in MyPlan: CHEM 142</i></a>
        <a name="chem152"><b>CHEM 152 General Chemistry (5) NW</b>
        Continuation of CHEM 142. Offered: jointly with B CHEM 152; AWSpS.
        <i>View course details in MyPlan: CHEM 152</i></a>
    </body></html>"#;

    #[test]
    fn test_department_pages_filters_and_dedupes() {
        let pages = department_pages(INDEX_PAGE);
        assert_eq!(pages, vec!["chem.html", "math.html"]);
    }

    #[test]
    fn test_parse_department_extracts_records() {
        let records = parse_department(DEPT_PAGE, Campus::Seattle);
        assert_eq!(records.len(), 2);

        let record = &records[0];
        assert_eq!(record.course_id(), "CHEM142");
        assert_eq!(record.department, "CHEM");
        assert_eq!(record.number, "142");
        assert_eq!(record.name, "General Chemistry");
        assert_eq!(record.credits, "5");
        assert_eq!(record.areas, "NW,QSR");
        assert_eq!(record.offered.to_string(), "A,W,Sp,S");
        assert_eq!(record.prerequisites.as_str(), "CHEM110,CHEM120");
        assert!(record.corequisites.is_empty());
        assert!(!record.description.contains("MyPlan"));
    }

    #[test]
    fn test_parse_department_jointly_offered() {
        let records = parse_department(DEPT_PAGE, Campus::Seattle);
        assert_eq!(records[1].jointly, "BCHEM152");
        assert_eq!(records[1].offered.to_string(), "A,W,Sp,S");
    }
}
