pub mod login_user_command;
pub mod register_user_command;
