//! Pickme API Library
//!
//! CRUD service for categories and pickme items. Handlers validate input,
//! delegate to repository traits and map failures to status codes.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
