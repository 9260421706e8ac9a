use async_trait::async_trait;

use crate::iam::domain::model::{
    commands::{login_user_command::LoginUserCommand, register_user_command::RegisterUserCommand},
    entities::{issued_access_token::IssuedAccessToken, user_account::UserAccount},
    enums::iam_domain_error::IamDomainError,
};

#[async_trait]
pub trait UserAccountCommandService: Send + Sync {
    async fn handle_register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserAccount, IamDomainError>;

    async fn handle_login(
        &self,
        command: LoginUserCommand,
    ) -> Result<IssuedAccessToken, IamDomainError>;
}
