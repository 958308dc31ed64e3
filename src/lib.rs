//! Zoneshift - timezone conversions on a naive-UTC core
//!
//! This library keeps one convention throughout: moments in time travel
//! through a program as naive instants whose wall-clock fields are UTC, and
//! a timezone is applied only at the edges, where local wall time enters or
//! leaves. Conversions run against the IANA timezone database via chrono-tz,
//! DST rules included, and apart from the clock read in [`now`] every
//! operation is a pure function of its arguments.
//!
//! # Modules
//!
//! The library is organized into a few small modules:
//!
//! * [`convert`] - Conversions between local, universal and UNIX time
//! * [`error`] - Error and result types shared across the crate
//! * [`format`] - Rendering universal instants as zone-local strings
//! * [`instant`] - The instant value type, naive or zone-attached
//! * [`timezone`] - Timezone references and name resolution

/// Conversions between local time, universal time and UNIX timestamps
pub mod convert;

/// Error and result types shared across the crate
pub mod error;

/// Rendering universal instants as zone-local strings
pub mod format;

/// The instant value type, naive or zone-attached
pub mod instant;

/// Timezone references and name resolution
pub mod timezone;

// Re-export the whole conversion surface for flat call sites
pub use convert::{from_local, from_unix, from_universal, now, to_local, to_universal, to_unix};
pub use error::{Error, Result};
pub use format::{format, DEFAULT_FORMAT};
pub use instant::Instant;
pub use timezone::TimezoneRef;
