pub mod search_term;
pub mod suggestion_size;
