pub mod app;
pub mod error;
pub mod pagination;
pub mod routes;
