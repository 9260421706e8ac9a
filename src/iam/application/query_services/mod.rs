pub mod user_account_query_service_impl;
