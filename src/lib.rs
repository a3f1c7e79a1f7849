//! Job portal web frontend: credential collection, identity-service
//! requests, and session token persistence.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
