//! Rule-based extraction of structured course data from free-text catalog
//! descriptions and time-schedule text blobs.
//!
//! Every function in this crate is a pure, stateless rewrite of its input:
//! malformed text degrades to an empty or partial result instead of an error,
//! so one unparseable field never drops a whole record. Compiled patterns
//! live in process-wide immutable tables and the crate is safe to call from
//! any number of parallel workers.

pub mod description;
pub mod offered;
pub mod requisites;
pub mod schedule;
pub mod time;
