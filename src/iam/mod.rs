use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    iam::{
        application::{
            acl::{
                delegated_token_authority_impl::DelegatedTokenAuthorityImpl,
                direct_token_authority_impl::DirectTokenAuthorityImpl,
                token_gate_facade_impl::TokenGateFacadeImpl,
            },
            command_services::user_account_command_service_impl::UserAccountCommandServiceImpl,
            query_services::user_account_query_service_impl::UserAccountQueryServiceImpl,
        },
        domain::model::enums::token_validation_strategy::TokenValidationStrategy,
        infrastructure::{
            persistence::repositories::postgres::{
                sqlx_token_record_repository_impl::SqlxTokenRecordRepositoryImpl,
                sqlx_user_account_repository_impl::SqlxUserAccountRepositoryImpl,
            },
            security::argon2_credential_hasher::Argon2CredentialHasher,
        },
        interfaces::{
            acl::{token_authority::TokenAuthority, token_gate_facade::TokenGateFacade},
            rest::controllers::iam_rest_controller::{IamRestControllerState, router},
        },
    },
    shared::domain::services::clock::SystemClock,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_token_gate(
    config: &AppConfig,
    pool: PgPool,
) -> Result<Arc<dyn TokenGateFacade>, String> {
    let strategy = config
        .token_validation_strategy
        .parse::<TokenValidationStrategy>()?;

    let authority: Arc<dyn TokenAuthority> = match strategy {
        TokenValidationStrategy::Direct => Arc::new(DirectTokenAuthorityImpl::new(Arc::new(
            SqlxTokenRecordRepositoryImpl::new(pool),
        ))),
        TokenValidationStrategy::Delegated => {
            let endpoint = config.token_validator_url.clone().ok_or_else(|| {
                "TOKEN_VALIDATOR_URL is required for the delegated strategy".to_string()
            })?;
            Arc::new(DelegatedTokenAuthorityImpl::new(
                endpoint,
                config.token_lookup_timeout(),
            )?)
        }
    };

    tracing::info!(strategy = strategy.as_str(), "token gate configured");

    Ok(Arc::new(TokenGateFacadeImpl::new(
        authority,
        Arc::new(SystemClock),
        config.token_lookup_timeout(),
    )))
}

pub fn build_iam_router(
    config: &AppConfig,
    pool: PgPool,
    token_gate: Arc<dyn TokenGateFacade>,
) -> Result<Router, String> {
    let clock = Arc::new(SystemClock);
    let user_repository = Arc::new(SqlxUserAccountRepositoryImpl::new(pool.clone()));
    let token_repository = Arc::new(SqlxTokenRecordRepositoryImpl::new(pool));

    let command_service = Arc::new(UserAccountCommandServiceImpl::new(
        user_repository.clone(),
        token_repository.clone(),
        Arc::new(Argon2CredentialHasher::new()),
        clock.clone(),
        config.access_token_ttl(),
    ));
    let query_service = Arc::new(UserAccountQueryServiceImpl::new(user_repository));

    let authority_gate = Arc::new(TokenGateFacadeImpl::new(
        Arc::new(DirectTokenAuthorityImpl::new(token_repository)),
        clock,
        config.token_lookup_timeout(),
    ));

    Ok(router(IamRestControllerState {
        command_service,
        query_service,
        token_gate,
        authority_gate,
    }))
}
