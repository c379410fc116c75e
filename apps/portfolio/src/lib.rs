//! Single-page portfolio site: server-rendered page, filterable project
//! gallery, and the contact form submit flow.

pub mod config;
pub mod contact;
pub mod errors;
pub mod gallery;
pub mod routes;
pub mod site;
pub mod state;
pub mod telemetry;
