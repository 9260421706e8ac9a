pub mod curso_id;
