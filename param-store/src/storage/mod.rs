pub mod adapters;
pub mod factory;
pub mod pagination;
pub mod repository;
