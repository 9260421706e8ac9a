pub mod compra_query_service_impl;
