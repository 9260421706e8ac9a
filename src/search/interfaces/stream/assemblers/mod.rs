pub mod course_change_assembler;
