use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SyncOutcome {
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}
