pub mod sqlx_compra_repository_impl;
