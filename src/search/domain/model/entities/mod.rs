pub mod course_change;
pub mod course_document;
pub mod search_hit;
pub mod sync_outcome;
