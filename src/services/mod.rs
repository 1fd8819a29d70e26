//! Services module - Read-only catalog access.
//!
//! The services here are **framework-agnostic** and have no dependencies
//! on the view layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`CatalogService`]: loads the static `guides.json` document once and
//!   answers lookups over it:
//!   - direct class lookup by id
//!   - guide lookup by id (linear scan across all classes, returning the
//!     enclosing class with the subject)
//!   - bilingual search filtering for classes and subjects
//!   - version grouping (`Bangla` / `English` sections on class pages)
//!   - bookmark resolution with class context
//!   - wall-clock quote rotation for the home view
//!
//! - [`CatalogError`]: typed lookup miss, rendered by the view layer as
//!   the not-found page.
//!
//! The catalog is never mutated; all user state lives in
//! [`StateManager`](crate::state::StateManager).

pub mod catalog;

pub use catalog::{CatalogError, CatalogService, ResolvedSubject};
