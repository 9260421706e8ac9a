pub mod create_curso_command;
pub mod delete_curso_command;
pub mod update_curso_command;
