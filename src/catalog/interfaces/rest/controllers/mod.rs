pub mod curso_rest_controller;
