pub mod search_rest_controller;
