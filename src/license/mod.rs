//! License identification for project metadata and documentation.
//!
//! - [`spdx`] maps SPDX identifiers to a [`LicenseKind`](crate::models::LicenseKind)
//!   and resolves common free-form names to SPDX.
//! - [`classifier`] normalizes manifest license strings and classifies
//!   `OR` / `AND` expressions.
//! - [`text`] recognizes the license in a LICENSE file.

pub mod classifier;
pub mod spdx;
pub mod text;

pub use classifier::{license_kind, normalize_license};
pub use text::identify_license_text;
