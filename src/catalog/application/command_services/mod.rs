pub mod curso_command_service_impl;
