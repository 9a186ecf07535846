pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod messages;
pub mod opportunities;
pub mod org;
