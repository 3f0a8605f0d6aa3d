//! Networking modules for the auth REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_api` performs the four session calls, `types` defines the shared
//! wire schema. Everything else the backend offers (orders, parts, planning,
//! users CRUD) is consumed by out-of-scope page plumbing, not here.

pub mod auth_api;
pub mod types;
