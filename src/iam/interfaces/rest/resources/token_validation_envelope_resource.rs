use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TokenValidationRequestResource {
    #[serde(default)]
    pub headers: TokenValidationHeadersResource,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TokenValidationHeadersResource {
    #[serde(rename = "Authorization", alias = "authorization", default)]
    pub authorization: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TokenValidationEnvelopeResource {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TokenValidationIdentityResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}
