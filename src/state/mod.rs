//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` holds the plain data and every transition (natively testable);
//! `store` owns the signal, the storage writes, and the network-driving
//! operations. Nothing outside `store` mutates session state.

pub mod session;
pub mod store;
