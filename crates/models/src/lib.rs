pub mod campus;
pub mod course_code;
pub mod quarter;
pub mod record;
pub mod requisite;
pub mod section;
