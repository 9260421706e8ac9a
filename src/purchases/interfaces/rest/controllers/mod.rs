pub mod compra_rest_controller;
