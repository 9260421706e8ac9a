use std::{
    collections::{BTreeMap, HashMap},
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use cursos_api::{
    iam::{
        domain::model::{
            enums::auth_error::AuthError,
            value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId, user_id::UserId},
        },
        interfaces::acl::token_gate_facade::TokenGateFacade,
    },
    purchases::{
        domain::model::{
            entities::{compra::Compra, compra_snapshot::CompraSnapshot},
            enums::purchases_domain_error::PurchasesDomainError,
        },
        infrastructure::{
            archive::repositories::compra_archive_repository::CompraArchiveRepository,
            persistence::repositories::compra_repository::CompraRepository,
        },
    },
    shared::domain::services::clock::Clock,
};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
struct FakeCompraRepositoryState {
    rows: BTreeMap<(String, String), Compra>,
    queried_tenants: Vec<String>,
}

pub struct FakeCompraRepository {
    state: Mutex<FakeCompraRepositoryState>,
}

impl FakeCompraRepository {
    pub fn seeded(compras: Vec<Compra>) -> Self {
        let rows = compras
            .into_iter()
            .map(|compra| (key_of(&compra), compra))
            .collect();

        Self {
            state: Mutex::new(FakeCompraRepositoryState {
                rows,
                ..FakeCompraRepositoryState::default()
            }),
        }
    }

    pub fn all(&self) -> Vec<Compra> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .rows
            .values()
            .cloned()
            .collect()
    }

    pub fn queried_tenants(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .queried_tenants
            .clone()
    }
}

fn key_of(compra: &Compra) -> (String, String) {
    (
        compra.tenant_id().as_str().to_string(),
        compra.order_id().value().to_string(),
    )
}

#[async_trait]
impl CompraRepository for FakeCompraRepository {
    async fn insert(&self, compra: &Compra) -> Result<bool, PurchasesDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let key = key_of(compra);
        if state.rows.contains_key(&key) {
            return Ok(false);
        }
        state.rows.insert(key, compra.clone());
        Ok(true)
    }

    async fn list_page(
        &self,
        tenant_id: &TenantId,
        user_id: Option<&UserId>,
        after: Option<&str>,
        fetch: i64,
    ) -> Result<Vec<Compra>, PurchasesDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.queried_tenants.push(tenant_id.as_str().to_string());

        Ok(state
            .rows
            .values()
            .filter(|compra| compra.tenant_id() == tenant_id)
            .filter(|compra| user_id.is_none_or(|user_id| compra.user_id() == user_id))
            .filter(|compra| after.is_none_or(|after| compra.order_id().value() > after))
            .take(fetch as usize)
            .cloned()
            .collect())
    }
}

pub struct FakeTokenGate {
    identities: HashMap<String, ResolvedIdentity>,
}

impl FakeTokenGate {
    pub fn with_tokens(tokens: Vec<(&str, ResolvedIdentity)>) -> Self {
        Self {
            identities: tokens
                .into_iter()
                .map(|(token, identity)| (token.to_string(), identity))
                .collect(),
        }
    }
}

#[async_trait]
impl TokenGateFacade for FakeTokenGate {
    async fn authenticate(
        &self,
        raw_credential: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthError> {
        let token = raw_credential
            .map(|raw| raw.trim().trim_start_matches("Bearer ").trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredential)?;
        self.identities
            .get(token)
            .cloned()
            .ok_or(AuthError::NotFound)
    }
}

/// Archive that refuses every write.
pub struct UnreachableArchive;

#[async_trait]
impl CompraArchiveRepository for UnreachableArchive {
    async fn put_snapshot(
        &self,
        _day: NaiveDate,
        _snapshot: &CompraSnapshot,
    ) -> Result<String, PurchasesDomainError> {
        Err(PurchasesDomainError::InfrastructureError(
            "bucket unreachable".to_string(),
        ))
    }
}
