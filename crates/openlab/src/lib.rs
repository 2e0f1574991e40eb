//! Backend for the OpenLab recruiting marketplace: lab-posted micro-research
//! notices, student application intake, and resume screening.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
