use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageCursorError {
    #[error("cursor cannot be decoded")]
    Undecodable,

    #[error("cursor belongs to a different tenant")]
    ForeignTenant,
}

#[derive(Serialize, Deserialize)]
struct CursorPayload {
    tenant_id: String,
    key: String,
}

/// Opaque continuation token naming the last key of the previous page.
///
/// The tenant is embedded so a cursor minted for one tenant can never be
/// replayed to page through another tenant's partition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageCursor {
    key: String,
}

impl PageCursor {
    pub fn encode(tenant_id: &str, key: &str) -> String {
        let payload = CursorPayload {
            tenant_id: tenant_id.to_string(),
            key: key.to_string(),
        };
        // Serializing two strings cannot fail.
        let json = serde_json::to_vec(&payload).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(raw: &str, tenant_id: &str) -> Result<Self, PageCursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw.trim())
            .map_err(|_| PageCursorError::Undecodable)?;
        let payload: CursorPayload =
            serde_json::from_slice(&bytes).map_err(|_| PageCursorError::Undecodable)?;

        if payload.tenant_id != tenant_id {
            return Err(PageCursorError::ForeignTenant);
        }
        if payload.key.is_empty() {
            return Err(PageCursorError::Undecodable);
        }

        Ok(Self { key: payload.key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
