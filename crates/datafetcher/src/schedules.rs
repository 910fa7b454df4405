//! Time-schedule scraping: quarter index URLs, department page discovery and
//! per-department meeting-row extraction.
//!
//! A department schedule page is a run of `<br/>`-separated chunks, one per
//! course. Each chunk carries a `<table>` whose first anchor names the
//! course and one `<pre>` block per section line.

use lazy_static::lazy_static;
use models::{campus::Campus, quarter::Quarter, section::ScheduleSection};
use scraper::{Html, Selector};
use std::collections::HashSet;

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref TABLE: Selector = Selector::parse("table").unwrap();
    static ref PRE: Selector = Selector::parse("pre").unwrap();
}

/// URL of one quarter's schedule index for a campus, e.g.
/// `https://www.washington.edu/students/timeschd/AUT2020/`
pub fn quarter_url(campus: Campus, quarter: Quarter, year: u16) -> String {
    format!("{}{}{}/", campus.schedule_url(), quarter.code(), year)
}

/// Collects the department page URLs linked from a schedule index page.
///
/// Kept links are bare page names (or absolute URLs under `base_url`) with
/// any fragment stripped, resolved against `base_url`, first occurrence of
/// each kept in page order.
pub fn department_links(index_html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(index_html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for link in document.select(&ANCHOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let page = href.replacen(base_url, "", 1);
        if page.contains('/') || !(page.contains(".html") || href.contains(base_url)) {
            continue;
        }
        let target = href.rsplit_once('#').map_or(href, |(before, _)| before);
        let file = target.rsplit('/').next().unwrap_or(target);
        let url = format!("{base_url}{file}");
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }
    links
}

/// Extracts every meeting row from one department schedule page.
pub fn parse_department(html: &str) -> Vec<ScheduleSection> {
    // The first two <br/> separate the page header from the course chunks
    let body = html.splitn(3, "<br/>").last().unwrap_or(html);
    let mut rows = Vec::new();

    for chunk in body.split("<br/>") {
        let fragment = Html::parse_fragment(chunk);
        let Some(table) = fragment.select(&TABLE).next() else {
            continue;
        };
        let Some(name) = table
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("name"))
        else {
            continue;
        };
        for pre in fragment.select(&PRE) {
            let text: String = pre.text().collect();
            rows.extend(parser::schedule::extract_sections(&text, name));
        }
    }
    rows
}
