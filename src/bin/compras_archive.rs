//! Archives a batch of purchase change records to object storage.
//!
//! Reads `{"Records": [...]}` from stdin and prints the outcome as JSON.
//! Exits non-zero when the batch cannot be read or any write failed.

use std::{io::Read, process::ExitCode};

use cursos_api::{
    config::app_config::AppConfig,
    init_tracing,
    purchases::{
        build_compra_archive_service,
        domain::services::compra_archive_service::CompraArchiveService,
        interfaces::stream::assemblers::compra_change_assembler::to_changes,
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

    let service = match build_compra_archive_service(&config) {
        Ok(service) => service,
        Err(error) => {
            tracing::error!(%error, "could not configure archive store");
            return ExitCode::FAILURE;
        }
    };

    let outcome = service.handle_archive(to_changes(batch)).await;

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
