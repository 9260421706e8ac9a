use cursos_api::{
    catalog::domain::model::{
        entities::curso::{Curso, CursoDetails, CursoRevision},
        value_objects::curso_id::CursoId,
    },
    iam::domain::model::value_objects::{
        resolved_identity::ResolvedIdentity, tenant_id::TenantId, user_id::UserId,
    },
};

pub fn identity(tenant_id: &str, user_id: &str) -> ResolvedIdentity {
    ResolvedIdentity::new(
        TenantId::new(tenant_id.to_string()).expect("tenant"),
        UserId::new(user_id.to_string()).expect("user"),
    )
}

pub fn details(nombre: &str) -> CursoDetails {
    CursoDetails {
        nombre: nombre.to_string(),
        precio: Some(49.9),
        categories: vec!["programacion".to_string()],
        ..CursoDetails::default()
    }
}

pub fn revision(nombre: &str) -> CursoRevision {
    CursoRevision {
        nombre: nombre.to_string(),
        descripcion: Some("actualizado".to_string()),
        duracion: Some("12h".to_string()),
    }
}

pub fn curso(tenant_id: &str, curso_id: &str, nombre: &str) -> Curso {
    Curso::new(
        TenantId::new(tenant_id.to_string()).expect("tenant"),
        CursoId::new(curso_id.to_string()).expect("curso id"),
        details(nombre),
    )
}
