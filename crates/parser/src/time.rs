//! Conversion of compact schedule time ranges (`930-1120`, `1230-120P`) into
//! clock times.

use chrono::{Duration, NaiveTime};
use lazy_static::lazy_static;

lazy_static! {
    static ref EARLY_LOW: NaiveTime = NaiveTime::from_hms_opt(0, 1, 0).unwrap();
    static ref EARLY_HIGH: NaiveTime = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
    static ref LATE_LOW: NaiveTime = NaiveTime::from_hms_opt(22, 30, 0).unwrap();
    static ref LATE_HIGH: NaiveTime = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
}

/// Parses a compact `HHMM-HHMM` range into a pair of clock times.
///
/// A single trailing `P` marks the whole range as afternoon. Returns `None`
/// for an empty or malformed range rather than guessing.
pub fn to_time(range: &str) -> Option<(NaiveTime, NaiveTime)> {
    if range.is_empty() {
        return None;
    }
    let pm = range.contains('P');
    let range = range.replacen('P', "", 1);
    let (start, end) = range.split_once('-')?;
    Some((parse_clock(start, pm)?, parse_clock(end, pm)?))
}

fn parse_clock(token: &str, pm: bool) -> Option<NaiveTime> {
    // A clock token is a pure digit run; anything else is unparseable
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match token.len() {
        3 => token.split_at(1),
        n if n >= 2 => token.split_at(2),
        _ => return None,
    };
    let meridiem = if pm { "PM" } else { "AM" };
    let parsed =
        NaiveTime::parse_from_str(&format!("{hours}:{minutes} {meridiem}"), "%I:%M %p").ok()?;
    Some(correct_meridiem(parsed))
}

/// Classes never meet in the small hours or just before midnight; a parse
/// landing there picked the wrong meridiem and gets flipped twelve hours.
fn correct_meridiem(t: NaiveTime) -> NaiveTime {
    let implausible = (*EARLY_LOW < t && t < *EARLY_HIGH) || (*LATE_LOW < t && t < *LATE_HIGH);
    if implausible {
        t.overflowing_add_signed(Duration::hours(12)).0
    } else {
        t
    }
}
