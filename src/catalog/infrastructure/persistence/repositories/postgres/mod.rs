pub mod sqlx_curso_repository_impl;
