use crate::purchases::domain::model::entities::compra_snapshot::CompraSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum CompraChange {
    Archive(CompraSnapshot),
    Ignored(String),
    Unusable(String),
}
