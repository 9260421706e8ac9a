pub mod autocomplete_cursos_query;
pub mod search_cursos_query;
