//! Client library for the city information platform API.
//!
//! The crate is split into two cooperating layers:
//!
//! - **API access** ([`features`]): one async function per backend endpoint,
//!   grouped by domain (community, map, moderation, transit, auth). Domain
//!   records travel as opaque JSON; the wrappers never recover from errors,
//!   every failure surfaces to the caller.
//! - **Session** ([`features::auth`]): the sign-in flow, a process-wide
//!   [`SessionStore`] holding the token and user record, and the pure
//!   role-based destination logic used after a successful sign-in.
//!
//! All transport goes through [`ApiClient`], which owns request
//! construction, timeouts, and auth-header injection. Call sites never set
//! the `Authorization` header themselves, and multipart call sites never
//! set a content-type, so the boundary is always generated by the HTTP
//! library.

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod features;

pub use client::{ApiClient, Body, Method, RequestDescriptor};
pub use config::ClientConfig;
pub use errors::ApiError;
pub use features::auth::state::SessionStore;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
