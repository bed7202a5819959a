pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod methods;
pub mod report;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).
