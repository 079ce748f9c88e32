pub mod config;
pub mod db;
pub mod routes;
pub mod telemetry;
pub mod types;
