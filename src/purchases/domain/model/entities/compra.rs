use chrono::{DateTime, Utc};

use crate::{
    catalog::domain::model::value_objects::curso_id::CursoId,
    iam::domain::model::value_objects::{tenant_id::TenantId, user_id::UserId},
    purchases::domain::model::value_objects::order_id::OrderId,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Compra {
    tenant_id: TenantId,
    order_id: OrderId,
    user_id: UserId,
    curso_id: CursoId,
    quantity: i32,
    price: f64,
    created_at: DateTime<Utc>,
}

pub struct CompraParts {
    pub tenant_id: TenantId,
    pub order_id: OrderId,
    pub user_id: UserId,
    pub curso_id: CursoId,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Compra {
    pub fn new(parts: CompraParts) -> Self {
        Self {
            tenant_id: parts.tenant_id,
            order_id: parts.order_id,
            user_id: parts.user_id,
            curso_id: parts.curso_id,
            quantity: parts.quantity,
            price: parts.price,
            created_at: parts.created_at,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn curso_id(&self) -> &CursoId {
        &self.curso_id
    }
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
    pub fn price(&self) -> f64 {
        self.price
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
