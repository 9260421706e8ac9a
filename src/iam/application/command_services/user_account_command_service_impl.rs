use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;

use crate::{
    iam::{
        domain::{
            model::{
                commands::{
                    login_user_command::LoginUserCommand,
                    register_user_command::RegisterUserCommand,
                },
                entities::{
                    issued_access_token::IssuedAccessToken, token_record::TokenRecord,
                    user_account::UserAccount,
                },
                enums::iam_domain_error::IamDomainError,
                value_objects::{access_token::AccessToken, token_expiry::TokenExpiry},
            },
            services::{
                credential_hasher::CredentialHasher,
                user_account_command_service::UserAccountCommandService,
            },
        },
        infrastructure::persistence::repositories::{
            token_record_repository::TokenRecordRepository,
            user_account_repository::UserAccountRepository,
        },
    },
    shared::domain::services::clock::Clock,
};

pub struct UserAccountCommandServiceImpl {
    user_repository: Arc<dyn UserAccountRepository>,
    token_repository: Arc<dyn TokenRecordRepository>,
    hasher: Arc<dyn CredentialHasher>,
    clock: Arc<dyn Clock>,
    token_ttl: chrono::Duration,
}

impl UserAccountCommandServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserAccountRepository>,
        token_repository: Arc<dyn TokenRecordRepository>,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
        token_ttl: chrono::Duration,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            hasher,
            clock,
            token_ttl,
        }
    }
}

#[async_trait]
impl UserAccountCommandService for UserAccountCommandServiceImpl {
    async fn handle_register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserAccount, IamDomainError> {
        let password_hash = self.hasher.hash(command.password().value())?;
        let account = UserAccount::new(
            command.tenant_id().clone(),
            command.user_id().clone(),
            password_hash,
            self.clock.now(),
        );

        if !self.user_repository.insert(&account).await? {
            return Err(IamDomainError::UserAlreadyExists);
        }

        tracing::info!(
            tenant_id = %account.tenant_id(),
            user_id = %account.user_id(),
            "user registered"
        );

        Ok(account)
    }

    async fn handle_login(
        &self,
        command: LoginUserCommand,
    ) -> Result<IssuedAccessToken, IamDomainError> {
        let Some(account) = self
            .user_repository
            .find(command.tenant_id(), command.user_id())
            .await?
        else {
            tracing::warn!(tenant_id = %command.tenant_id(), "login rejected: unknown user");
            return Err(IamDomainError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(command.password(), account.password_hash())
        {
            tracing::warn!(tenant_id = %command.tenant_id(), "login rejected: wrong password");
            return Err(IamDomainError::InvalidCredentials);
        }

        let token = AccessToken::generate();
        let expires = TokenExpiry::from_datetime(self.clock.now().trunc_subsecs(0) + self.token_ttl);
        let record = TokenRecord::issue(
            token.value().to_string(),
            account.tenant_id(),
            account.user_id(),
            expires,
        );

        self.token_repository
            .save(&record)
            .await
            .map_err(IamDomainError::InfrastructureError)?;

        Ok(IssuedAccessToken {
            token: token.into_inner(),
            tenant_id: account.tenant_id().clone(),
            user_id: account.user_id().clone(),
            expires,
        })
    }
}
