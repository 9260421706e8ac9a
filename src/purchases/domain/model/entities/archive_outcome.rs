use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ArchiveOutcome {
    pub archived: usize,
    pub skipped: usize,
    pub failed: usize,
}
