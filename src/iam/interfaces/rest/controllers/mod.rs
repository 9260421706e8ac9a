pub mod iam_rest_controller;
