pub mod controllers;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
