//! Fetch-and-locate plumbing around the text parser: downloads catalog and
//! time-schedule pages, finds the relevant text blobs in the HTML, and
//! assembles structured records from them.

pub mod catalog;
pub mod schedules;
pub mod util;
