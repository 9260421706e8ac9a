pub mod create_compra_command;
