pub mod archive_outcome;
pub mod compra;
pub mod compra_change;
pub mod compra_snapshot;
