pub mod analytics;
pub mod article;
pub mod customer;
pub mod template;
