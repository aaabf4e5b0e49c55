//! HTTP handlers

pub mod auth;
pub mod customers;
pub mod health;
pub mod leads;
