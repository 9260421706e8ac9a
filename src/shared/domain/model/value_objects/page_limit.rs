pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageLimit(u32);

impl PageLimit {
    pub fn new(value: Option<u32>) -> Result<Self, String> {
        match value {
            None => Ok(Self(DEFAULT_PAGE_LIMIT)),
            Some(0) => Err("limit must be greater than zero".to_string()),
            Some(limit) if limit > MAX_PAGE_LIMIT => {
                Err(format!("limit must not exceed {MAX_PAGE_LIMIT}"))
            }
            Some(limit) => Ok(Self(limit)),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn fetch_size(&self) -> i64 {
        i64::from(self.0) + 1
    }
}
