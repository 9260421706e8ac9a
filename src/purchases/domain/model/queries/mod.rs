pub mod list_compras_query;
