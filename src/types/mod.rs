pub mod rating;
pub mod report;
