pub mod object_store_compra_archive_repository_impl;
