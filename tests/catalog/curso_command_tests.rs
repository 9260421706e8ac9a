use cursos_api::catalog::domain::{
    model::{
        commands::{
            create_curso_command::CreateCursoCommand, delete_curso_command::DeleteCursoCommand,
            update_curso_command::UpdateCursoCommand,
        },
        entities::curso::{Curso, CursoDetails, CursoRevision},
        enums::catalog_domain_error::CatalogDomainError,
    },
    services::curso_command_service::CursoCommandService,
};

use crate::support::{create_catalog_harness, curso, details, identity, revision};

#[tokio::test]
async fn create_stores_curso_under_the_caller_tenant() {
    let harness = create_catalog_harness(Vec::new());
    let command =
        CreateCursoCommand::new(&identity("t1", "u1"), "c1".to_string(), details("Rust"))
            .expect("valid command");

    let created = harness
        .command_service
        .handle_create(command)
        .await
        .expect("create should succeed");

    assert_eq!(created.tenant_id().as_str(), "t1");
    assert!(harness.repository.stored("t1", "c1").is_some());
    assert!(harness.repository.stored("t2", "c1").is_none());
}

#[tokio::test]
async fn duplicate_create_in_same_tenant_conflicts() {
    let harness = create_catalog_harness(vec![curso("t1", "c1", "Rust")]);
    let command =
        CreateCursoCommand::new(&identity("t1", "u1"), "c1".to_string(), details("Go"))
            .expect("valid command");

    let result = harness.command_service.handle_create(command).await;

    assert_eq!(result, Err(CatalogDomainError::CursoAlreadyExists));
    assert_eq!(
        harness
            .repository
            .stored("t1", "c1")
            .map(|c| c.details().nombre.clone()),
        Some("Rust".to_string())
    );
}

#[tokio::test]
async fn same_curso_id_in_other_tenant_is_independent() {
    let harness = create_catalog_harness(vec![curso("t1", "c1", "Rust")]);
    let command =
        CreateCursoCommand::new(&identity("t2", "u7"), "c1".to_string(), details("Go"))
            .expect("valid command");

    assert!(harness.command_service.handle_create(command).await.is_ok());
    assert!(harness.repository.stored("t2", "c1").is_some());
}

#[tokio::test]
async fn update_and_delete_never_touch_other_tenants() {
    let harness = create_catalog_harness(vec![curso("t1", "c1", "Rust")]);
    let intruder = identity("t2", "u7");

    let update = UpdateCursoCommand::new(&intruder, "c1".to_string(), revision("Hijacked"))
        .expect("valid command");
    assert_eq!(
        harness.command_service.handle_update(update).await,
        Err(CatalogDomainError::CursoNotFound)
    );

    let delete = DeleteCursoCommand::new(&intruder, "c1".to_string()).expect("valid command");
    assert_eq!(
        harness.command_service.handle_delete(delete).await,
        Err(CatalogDomainError::CursoNotFound)
    );

    let untouched = harness.repository.stored("t1", "c1").expect("still stored");
    assert_eq!(untouched.details().nombre, "Rust");
}

#[tokio::test]
async fn update_rewrites_revised_fields_and_delete_removes() {
    let harness = create_catalog_harness(vec![curso("t1", "c1", "Rust")]);
    let owner = identity("t1", "u1");

    let update = UpdateCursoCommand::new(&owner, "c1".to_string(), revision("Rust avanzado"))
        .expect("valid command");
    harness
        .command_service
        .handle_update(update)
        .await
        .expect("update should succeed");
    assert_eq!(
        harness.repository.stored("t1", "c1").map(|c| c.details().nombre.clone()),
        Some("Rust avanzado".to_string())
    );

    let delete = DeleteCursoCommand::new(&owner, "c1".to_string()).expect("valid command");
    harness
        .command_service
        .handle_delete(delete)
        .await
        .expect("delete should succeed");
    assert!(harness.repository.stored("t1", "c1").is_none());
}

#[test]
fn commands_reject_invalid_input() {
    let caller = identity("t1", "u1");

    assert!(matches!(
        CreateCursoCommand::new(&caller, "../x".to_string(), details("Rust")),
        Err(CatalogDomainError::InvalidCursoId)
    ));
    assert!(matches!(
        CreateCursoCommand::new(&caller, "c1".to_string(), CursoDetails::default()),
        Err(CatalogDomainError::InvalidNombre)
    ));

    let negative = CursoDetails {
        estudiantes: Some(-3),
        ..details("Rust")
    };
    assert!(matches!(
        CreateCursoCommand::new(&caller, "c1".to_string(), negative),
        Err(CatalogDomainError::NegativeValue("estudiantes"))
    ));
    assert!(matches!(
        UpdateCursoCommand::new(&caller, "c1".to_string(), CursoRevision::default()),
        Err(CatalogDomainError::InvalidNombre)
    ));
}

#[tokio::test]
async fn update_keeps_fields_it_does_not_revise() {
    let seeded = curso("t1", "c1", "Rust");
    let seeded = Curso::new(
        seeded.tenant_id().clone(),
        seeded.curso_id().clone(),
        CursoDetails {
            precio: Some(50.0),
            rating: Some(4.5),
            instructor: Some("Ana".to_string()),
            estudiantes: Some(120),
            ..seeded.details().clone()
        },
    );
    let harness = create_catalog_harness(vec![seeded]);

    let update = UpdateCursoCommand::new(&identity("t1", "u1"), "c1".to_string(), revision("Rust 2"))
        .expect("valid command");
    let updated = harness
        .command_service
        .handle_update(update)
        .await
        .expect("update should succeed");

    let stored = harness.repository.stored("t1", "c1").expect("still stored");
    assert_eq!(stored, updated);
    assert_eq!(stored.details().nombre, "Rust 2");
    assert_eq!(stored.details().descripcion.as_deref(), Some("actualizado"));
    assert_eq!(stored.details().duracion.as_deref(), Some("12h"));
    assert_eq!(stored.details().precio, Some(50.0));
    assert_eq!(stored.details().rating, Some(4.5));
    assert_eq!(stored.details().instructor.as_deref(), Some("Ana"));
    assert_eq!(stored.details().estudiantes, Some(120));
    assert_eq!(stored.details().categories, vec!["programacion".to_string()]);
}
