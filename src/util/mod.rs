//! Small cross-cutting helpers shared by state and pages.

pub mod persistence;
