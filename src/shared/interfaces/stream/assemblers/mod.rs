pub mod attribute_image_assembler;
