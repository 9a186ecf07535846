//! REST API client module for the Handraise backend.
//!
//! This module provides the `ApiClient` gateway for all communication with
//! the platform: authentication, opportunity search, match ranking,
//! applications, conversations, and organization dashboards.
//!
//! The backend uses JWT bearer token authentication; the token is obtained
//! through `/auth/login` or `/auth/register` and attached to every call.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
