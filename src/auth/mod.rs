//! Authentication module for managing the bearer credential and the
//! derived session identity.
//!
//! This module provides:
//! - `CredentialStore`: in-process token cache mirrored to a durable slot
//! - `SessionQuery`: cached "who am I" resolution with logout
//! - `SessionEvents`: the forced-invalidation signal emitted by the gateway

pub mod credentials;
pub mod session;

pub use credentials::{CredentialStore, KeyringSlot, MemorySlot, TokenSlot};
pub use session::{SessionEvents, SessionQuery, SessionState};
