//! Applies a batch of catalog change records to the search index.
//!
//! Reads `{"Records": [...]}` from stdin and prints the outcome as JSON.
//! Exits non-zero when the batch cannot be read or any record failed.

use std::{io::Read, process::ExitCode};

use cursos_api::{
    config::app_config::AppConfig,
    init_tracing,
    search::{
        build_search_index_sync_service,
        domain::services::search_index_sync_service::SearchIndexSyncService,
        interfaces::stream::assemblers::course_change_assembler::to_changes,
    },
    shared::interfaces::stream::resources::change_batch_resource::ChangeBatchResource,
};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let mut input = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut input) {
        tracing::error!(%error, "could not read change batch from stdin");
        return ExitCode::FAILURE;
    }

    let batch: ChangeBatchResource = match serde_json::from_str(&input) {
        Ok(batch) => batch,
        Err(error) => {
            tracing::error!(%error, "change batch is not valid JSON");
            return ExitCode::FAILURE;
        }
    };

    let service = match build_search_index_sync_service(&config) {
        Ok(service) => service,
        Err(error) => {
            tracing::error!(%error, "could not configure search index client");
            return ExitCode::FAILURE;
        }
    };

    let outcome = service.handle_apply(to_changes(batch)).await;

    match serde_json::to_string(&outcome) {
        Ok(summary) => println!("{summary}"),
        Err(error) => tracing::error!(%error, "could not serialize outcome"),
    }

    if outcome.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
