//! Handraise - a terminal client for the Handraise volunteer matching
//! platform.
//!
//! The interesting machinery is session and authorization management:
//! `auth` owns the bearer credential and the derived identity, `api` wraps
//! every outbound request and hosts the centralized unauthorized
//! interceptor, and `routes` gates protected screens on the resolved
//! session. Everything else is presentation.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod notify;
pub mod routes;
pub mod ui;
pub mod utils;
