use crate::iam::domain::model::value_objects::{
    tenant_id::TenantId, token_expiry::TokenExpiry, user_id::UserId,
};

#[derive(Clone, Debug)]
pub struct IssuedAccessToken {
    pub token: String,
    pub tenant_id: TenantId,
    pub user_id: UserId,
    pub expires: TokenExpiry,
}
