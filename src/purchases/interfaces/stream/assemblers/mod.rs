pub mod compra_change_assembler;
