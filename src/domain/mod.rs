//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or HTTP code.
//! Repository traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
