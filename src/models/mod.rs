//! Domain models for the volunteer-matching platform.
//!
//! Wire shapes mirror the backend's JSON bodies; display helpers live next
//! to the types that need them.

pub mod application;
pub mod matching;
pub mod message;
pub mod opportunity;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use matching::MatchEntry;
pub use message::{Conversation, Message};
pub use opportunity::{Opportunity, OpportunityStatus, OrgOpportunityRow};
pub use user::{CurrentUser, Role};
