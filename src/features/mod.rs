pub mod auth;
pub mod community;
pub mod map;
pub mod moderation;
pub mod transit;
