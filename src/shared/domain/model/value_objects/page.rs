use crate::shared::domain::model::value_objects::{
    page_cursor::PageCursor, page_limit::PageLimit,
};

#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn from_overfetch(
        mut rows: Vec<T>,
        limit: PageLimit,
        tenant_id: &str,
        key_of: impl Fn(&T) -> &str,
    ) -> Self {
        let page_size = limit.value() as usize;
        let has_more = rows.len() > page_size;
        rows.truncate(page_size);

        let next_cursor = if has_more {
            rows.last()
                .map(|last| PageCursor::encode(tenant_id, key_of(last)))
        } else {
            None
        };

        Self {
            items: rows,
            next_cursor,
        }
    }
}
