pub mod get_curso_by_id_query;
pub mod list_cursos_query;
pub mod search_cursos_by_category_query;
pub mod search_cursos_by_name_query;
