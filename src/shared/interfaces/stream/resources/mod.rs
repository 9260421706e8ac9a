pub mod change_batch_resource;
