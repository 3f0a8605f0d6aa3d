//! Shared components: the boot gate, route guards, and page chrome.

pub mod boot;
pub mod guards;
pub mod topbar;
