use axum::Router;
use cursos_api::{
    catalog::{
        build_catalog_router,
        interfaces::rest::resources::{
            curso_page_resource::CursoPageResource,
            curso_request_resource::{
                CreateCursoRequestResource, CursoDetailsRequestResource, UpdateCursoRequestResource,
            },
            curso_resource::CursoResource,
        },
    },
    config::app_config::AppConfig,
    iam::{
        build_iam_router, build_token_gate,
        interfaces::rest::resources::{
            login_request_resource::LoginRequestResource,
            login_response_resource::LoginResponseResource,
            register_user_request_resource::RegisterUserRequestResource,
            token_validation_envelope_resource::{
                TokenValidationEnvelopeResource, TokenValidationHeadersResource,
                TokenValidationRequestResource,
            },
            user_account_resource::UserAccountResource,
        },
    },
    init_tracing,
    purchases::{
        build_purchases_router,
        interfaces::rest::resources::compra_resource::{
            CompraPageResource, CompraResource, CreateCompraRequestResource,
        },
    },
    search::{
        build_search_router,
        interfaces::rest::resources::{
            autocomplete_response_resource::{AutocompleteResponseResource, SuggestionResource},
            search_response_resource::{SearchHitResource, SearchResponseResource},
        },
    },
    shared::interfaces::rest::{
        cors::build_cors_layer,
        openapi::security::BearerSecurityAddon,
        resources::error_response_resource::ErrorResponseResource,
    },
};
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cursos_api::iam::interfaces::rest::controllers::iam_rest_controller::register_user,
        cursos_api::iam::interfaces::rest::controllers::iam_rest_controller::login_user,
        cursos_api::iam::interfaces::rest::controllers::iam_rest_controller::get_current_user,
        cursos_api::iam::interfaces::rest::controllers::iam_rest_controller::validate_token,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::create_curso,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::get_curso,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::update_curso,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::delete_curso,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::list_cursos,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::search_cursos_by_name,
        cursos_api::catalog::interfaces::rest::controllers::curso_rest_controller::search_cursos_by_category,
        cursos_api::purchases::interfaces::rest::controllers::compra_rest_controller::create_compra,
        cursos_api::purchases::interfaces::rest::controllers::compra_rest_controller::list_compras,
        cursos_api::search::interfaces::rest::controllers::search_rest_controller::search_cursos,
        cursos_api::search::interfaces::rest::controllers::search_rest_controller::autocomplete_cursos
    ),
    components(
        schemas(
            ErrorResponseResource,
            RegisterUserRequestResource,
            LoginRequestResource,
            LoginResponseResource,
            UserAccountResource,
            TokenValidationRequestResource,
            TokenValidationHeadersResource,
            TokenValidationEnvelopeResource,
            CreateCursoRequestResource,
            CursoDetailsRequestResource,
            UpdateCursoRequestResource,
            CursoResource,
            CursoPageResource,
            CreateCompraRequestResource,
            CompraResource,
            CompraPageResource,
            SearchResponseResource,
            SearchHitResource,
            AutocompleteResponseResource,
            SuggestionResource
        )
    ),
    tags(
        (name = "usuarios", description = "Accounts, login and token validation"),
        (name = "cursos", description = "Tenant-scoped course catalog"),
        (name = "compras", description = "Tenant-scoped purchases"),
        (name = "search", description = "Course search and autocomplete")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let token_gate =
        build_token_gate(&config, pool.clone()).expect("failed to configure token gate");

    let iam_router = build_iam_router(&config, pool.clone(), token_gate.clone())
        .expect("failed to build iam router");
    let catalog_router = build_catalog_router(pool.clone(), token_gate.clone());
    let purchases_router = build_purchases_router(pool, token_gate.clone());
    let search_router =
        build_search_router(&config, token_gate).expect("failed to build search router");

    let cors = build_cors_layer(&config.cors_allowed_origin).expect("failed to configure CORS");

    let app = Router::new()
        .merge(iam_router)
        .merge(catalog_router)
        .merge(purchases_router)
        .merge(search_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        strategy = %config.token_validation_strategy,
        "server listening; Swagger UI at /swagger-ui"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
