use crate::{
    catalog::domain::model::value_objects::curso_id::CursoId,
    iam::domain::model::value_objects::{
        resolved_identity::ResolvedIdentity, tenant_id::TenantId, user_id::UserId,
    },
    purchases::domain::model::{
        enums::purchases_domain_error::PurchasesDomainError, value_objects::order_id::OrderId,
    },
};

#[derive(Clone, Debug)]
pub struct CreateCompraCommand {
    tenant_id: TenantId,
    user_id: UserId,
    order_id: OrderId,
    curso_id: CursoId,
    quantity: i32,
    price: f64,
}

impl CreateCompraCommand {
    pub fn new(
        identity: &ResolvedIdentity,
        order_id: Option<String>,
        curso_id: String,
        quantity: i32,
        price: f64,
    ) -> Result<Self, PurchasesDomainError> {
        if quantity <= 0 {
            return Err(PurchasesDomainError::InvalidQuantity);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(PurchasesDomainError::InvalidPrice);
        }

        let order_id = match order_id.filter(|value| !value.trim().is_empty()) {
            Some(value) => OrderId::new(value)?,
            None => OrderId::generate(),
        };

        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            user_id: identity.user_id().clone(),
            order_id,
            curso_id: CursoId::new(curso_id).map_err(|_| PurchasesDomainError::InvalidCursoId)?,
            quantity,
            price,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
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
}
