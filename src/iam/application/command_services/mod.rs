pub mod user_account_command_service_impl;
