pub mod page;
pub mod page_cursor;
pub mod page_limit;
