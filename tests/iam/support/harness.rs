use std::{sync::Arc, time::Duration};

use axum::Router;
use chrono::{DateTime, Utc};
use cursos_api::iam::{
    application::{
        acl::{
            delegated_token_authority_impl::DelegatedTokenAuthorityImpl,
            direct_token_authority_impl::DirectTokenAuthorityImpl,
            token_gate_facade_impl::TokenGateFacadeImpl,
        },
        command_services::user_account_command_service_impl::UserAccountCommandServiceImpl,
        query_services::user_account_query_service_impl::UserAccountQueryServiceImpl,
    },
    domain::model::entities::token_record::TokenRecord,
    infrastructure::security::argon2_credential_hasher::Argon2CredentialHasher,
    interfaces::{
        acl::token_gate_facade::TokenGateFacade,
        rest::controllers::iam_rest_controller::{IamRestControllerState, router},
    },
};

use super::fakes::{
    FakeTokenRecordRepository, FakeUserAccountRepository, FixedClock, SlowTokenAuthority,
};

pub struct GateHarness {
    pub repository: Arc<FakeTokenRecordRepository>,
    pub clock: Arc<FixedClock>,
    pub gate: TokenGateFacadeImpl,
}

pub fn create_direct_gate(records: Vec<TokenRecord>, now: DateTime<Utc>) -> GateHarness {
    create_direct_gate_over(Arc::new(FakeTokenRecordRepository::with_records(records)), now)
}

pub fn create_direct_gate_over(
    repository: Arc<FakeTokenRecordRepository>,
    now: DateTime<Utc>,
) -> GateHarness {
    let clock = Arc::new(FixedClock::at(now));
    let gate = TokenGateFacadeImpl::new(
        Arc::new(DirectTokenAuthorityImpl::new(repository.clone())),
        clock.clone(),
        Duration::from_secs(5),
    );

    GateHarness {
        repository,
        clock,
        gate,
    }
}

pub fn create_delegated_gate(
    endpoint: String,
    now: DateTime<Utc>,
    timeout: Duration,
) -> TokenGateFacadeImpl {
    let authority =
        DelegatedTokenAuthorityImpl::new(endpoint, timeout).expect("http client should build");

    TokenGateFacadeImpl::new(Arc::new(authority), Arc::new(FixedClock::at(now)), timeout)
}

pub fn create_slow_gate(delay: Duration, timeout: Duration) -> TokenGateFacadeImpl {
    TokenGateFacadeImpl::new(
        Arc::new(SlowTokenAuthority { delay }),
        Arc::new(FixedClock::at(Utc::now())),
        timeout,
    )
}

pub struct UserHarness {
    pub users: Arc<FakeUserAccountRepository>,
    pub tokens: Arc<FakeTokenRecordRepository>,
    pub command_service: UserAccountCommandServiceImpl,
    pub query_service: UserAccountQueryServiceImpl,
    pub gate: TokenGateFacadeImpl,
}

pub fn create_user_harness(now: DateTime<Utc>) -> UserHarness {
    let users = Arc::new(FakeUserAccountRepository::new());
    let tokens = Arc::new(FakeTokenRecordRepository::with_records(Vec::new()));
    let clock = Arc::new(FixedClock::at(now));

    let command_service = UserAccountCommandServiceImpl::new(
        users.clone(),
        tokens.clone(),
        Arc::new(Argon2CredentialHasher::new()),
        clock.clone(),
        chrono::Duration::minutes(60),
    );
    let query_service = UserAccountQueryServiceImpl::new(users.clone());
    let gate = TokenGateFacadeImpl::new(
        Arc::new(DirectTokenAuthorityImpl::new(tokens.clone())),
        clock,
        Duration::from_secs(5),
    );

    UserHarness {
        users,
        tokens,
        command_service,
        query_service,
        gate,
    }
}

/// Router exposing the validation authority over the given token records.
pub fn create_validation_router(repository: Arc<FakeTokenRecordRepository>, now: DateTime<Utc>) -> Router {
    let users = Arc::new(FakeUserAccountRepository::new());
    let clock = Arc::new(FixedClock::at(now));
    let direct_gate: Arc<dyn TokenGateFacade> = Arc::new(TokenGateFacadeImpl::new(
        Arc::new(DirectTokenAuthorityImpl::new(repository.clone())),
        clock.clone(),
        Duration::from_secs(5),
    ));

    router(IamRestControllerState {
        command_service: Arc::new(UserAccountCommandServiceImpl::new(
            users.clone(),
            repository,
            Arc::new(Argon2CredentialHasher::new()),
            clock,
            chrono::Duration::minutes(60),
        )),
        query_service: Arc::new(UserAccountQueryServiceImpl::new(users)),
        token_gate: direct_gate.clone(),
        authority_gate: direct_gate,
    })
}
