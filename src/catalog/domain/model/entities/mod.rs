pub mod curso;
