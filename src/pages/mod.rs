//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one routed surface. `landing` is the role router behind
//! `/`; the rest are the destinations it and the guards coordinate.

pub mod access_issue;
pub mod admin;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod module_home;
pub mod products;
pub mod profile;
pub mod settings;
pub mod signup;
