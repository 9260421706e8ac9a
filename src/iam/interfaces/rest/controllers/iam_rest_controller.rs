use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::Value;
use validator::Validate;

use crate::{
    iam::{
        domain::{
            model::{
                commands::{
                    login_user_command::LoginUserCommand,
                    register_user_command::RegisterUserCommand,
                },
                entities::user_account::UserAccount,
                enums::{auth_error::AuthError, iam_domain_error::IamDomainError},
            },
            services::{
                user_account_command_service::UserAccountCommandService,
                user_account_query_service::UserAccountQueryService,
            },
        },
        interfaces::{
            acl::token_gate_facade::TokenGateFacade,
            rest::{
                guards::token_gate_guard::{
                    MISSING_TOKEN_MESSAGE, REJECTED_TOKEN_MESSAGE, authenticate_request,
                },
                resources::{
                    login_request_resource::LoginRequestResource,
                    login_response_resource::LoginResponseResource,
                    register_user_request_resource::RegisterUserRequestResource,
                    token_validation_envelope_resource::{
                        TokenValidationEnvelopeResource, TokenValidationIdentityResource,
                        TokenValidationRequestResource,
                    },
                    user_account_resource::UserAccountResource,
                },
            },
        },
    },
    shared::interfaces::rest::resources::error_response_resource::{
        ErrorResponseResource, RestError, rest_error,
    },
};

#[derive(Clone)]
pub struct IamRestControllerState {
    pub command_service: Arc<dyn UserAccountCommandService>,
    pub query_service: Arc<dyn UserAccountQueryService>,
    pub token_gate: Arc<dyn TokenGateFacade>,
    pub authority_gate: Arc<dyn TokenGateFacade>,
}

pub fn router(state: IamRestControllerState) -> Router {
    Router::new()
        .route("/usuarios/registro", post(register_user))
        .route("/usuarios/login", post(login_user))
        .route("/usuarios/me", get(get_current_user))
        .route("/usuarios/validar-token", post(validate_token))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/usuarios/registro",
    tag = "usuarios",
    request_body = RegisterUserRequestResource,
    responses(
        (status = 201, description = "User registered", body = UserAccountResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 409, description = "User already registered", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ErrorResponseResource)
    )
)]
pub async fn register_user(
    State(state): State<IamRestControllerState>,
    Json(request): Json<RegisterUserRequestResource>,
) -> Result<(StatusCode, Json<UserAccountResource>), RestError> {
    if let Err(validation_error) = request.validate() {
        return Err(rest_error(StatusCode::BAD_REQUEST, validation_error.to_string()));
    }

    let command = RegisterUserCommand::new(request.tenant_id, request.user_id, request.password)
        .map_err(map_domain_error)?;

    let account = state
        .command_service
        .handle_register(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&account))))
}

#[utoipa::path(
    post,
    path = "/usuarios/login",
    tag = "usuarios",
    request_body = LoginRequestResource,
    responses(
        (status = 200, description = "Access token issued", body = LoginResponseResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 403, description = "Invalid credentials", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ErrorResponseResource)
    )
)]
pub async fn login_user(
    State(state): State<IamRestControllerState>,
    Json(request): Json<LoginRequestResource>,
) -> Result<Json<LoginResponseResource>, RestError> {
    let command = LoginUserCommand::new(request.tenant_id, request.user_id, request.password)
        .map_err(map_domain_error)?;

    let issued = state
        .command_service
        .handle_login(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LoginResponseResource {
        token: issued.token,
        user_id: issued.user_id.to_string(),
        tenant_id: issued.tenant_id.to_string(),
        expires: issued.expires.to_iso8601(),
    }))
}

#[utoipa::path(
    get,
    path = "/usuarios/me",
    tag = "usuarios",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's account", body = UserAccountResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 404, description = "Account no longer exists", body = ErrorResponseResource),
        (status = 503, description = "Token validation unavailable", body = ErrorResponseResource)
    )
)]
pub async fn get_current_user(
    State(state): State<IamRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<UserAccountResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let account = state
        .query_service
        .handle_get_current(&identity)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&account)))
}

#[utoipa::path(
    post,
    path = "/usuarios/validar-token",
    tag = "usuarios",
    request_body = TokenValidationRequestResource,
    responses(
        (status = 200, description = "Validation verdict envelope", body = TokenValidationEnvelopeResource)
    )
)]
pub async fn validate_token(
    State(state): State<IamRestControllerState>,
    Json(request): Json<TokenValidationRequestResource>,
) -> Json<TokenValidationEnvelopeResource> {
    let verdict = state
        .authority_gate
        .authenticate(request.headers.authorization.as_deref())
        .await;

    let envelope = match verdict {
        Ok(identity) => {
            let body = TokenValidationIdentityResource {
                tenant_id: Some(identity.tenant_id().to_string()),
                user_id: Some(identity.user_id().to_string()),
                expires: None,
            };
            match serde_json::to_string(&body) {
                Ok(serialized) => envelope(200, Value::String(serialized)),
                Err(e) => envelope(500, Value::String(e.to_string())),
            }
        }
        Err(AuthError::MissingCredential) => envelope(401, message(MISSING_TOKEN_MESSAGE)),
        Err(AuthError::UpstreamUnavailable(_)) => {
            envelope(500, message("token store unavailable"))
        }
        Err(_) => envelope(403, message(REJECTED_TOKEN_MESSAGE)),
    };

    Json(envelope)
}

fn envelope(status_code: u16, body: Value) -> TokenValidationEnvelopeResource {
    TokenValidationEnvelopeResource {
        status_code,
        body: Some(body),
    }
}

fn message(text: &str) -> Value {
    serde_json::json!({ "message": text })
}

fn to_resource(account: &UserAccount) -> UserAccountResource {
    UserAccountResource {
        tenant_id: account.tenant_id().to_string(),
        user_id: account.user_id().to_string(),
        created_at: account.created_at().to_rfc3339(),
    }
}

fn map_domain_error(error: IamDomainError) -> RestError {
    let status = match error {
        IamDomainError::InvalidTenantId
        | IamDomainError::InvalidUserId
        | IamDomainError::InvalidPassword => StatusCode::BAD_REQUEST,
        IamDomainError::UserAlreadyExists => StatusCode::CONFLICT,
        IamDomainError::InvalidCredentials => StatusCode::FORBIDDEN,
        IamDomainError::UserNotFound => StatusCode::NOT_FOUND,
        IamDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if let IamDomainError::InfrastructureError(detail) = &error {
        tracing::error!(%detail, "iam request failed");
    }

    rest_error(status, error.to_string())
}
