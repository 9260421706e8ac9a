pub mod compra_resource;
