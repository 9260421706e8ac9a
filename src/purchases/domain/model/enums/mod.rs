pub mod purchases_domain_error;
