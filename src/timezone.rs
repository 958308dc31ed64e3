//! Timezone references and their resolution against the IANA database.
//!
//! A [`TimezoneRef`] is either a zone name still to be looked up or an
//! already-resolved [`chrono_tz::Tz`] handle. Resolution happens on every
//! use; `Tz` is a `Copy` handle into chrono-tz's compiled-in table, so
//! repeated lookups are a static perfect-hash probe and need no caching.

use std::fmt;

use chrono_tz::Tz;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A reference to a timezone, by name or as a resolved handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneRef {
    /// An IANA zone identifier such as `"Europe/Amsterdam"`, resolved on use.
    Name(String),
    /// An already-resolved zone handle.
    Resolved(Tz),
}

impl TimezoneRef {
    /// Resolves this reference to a zone handle.
    ///
    /// # Errors
    /// Returns [`Error::UnknownTimezone`] when the name is not in the
    /// timezone database.
    pub fn resolve(&self) -> Result<Tz> {
        match self {
            TimezoneRef::Resolved(tz) => Ok(*tz),
            TimezoneRef::Name(name) => {
                log::trace!("resolving timezone name '{name}'");
                name.parse()
                    .map_err(|_| Error::UnknownTimezone(name.clone()))
            }
        }
    }

    /// The zone name this reference carries.
    pub fn name(&self) -> &str {
        match self {
            TimezoneRef::Name(name) => name,
            TimezoneRef::Resolved(tz) => tz.name(),
        }
    }
}

impl From<&str> for TimezoneRef {
    fn from(name: &str) -> Self {
        TimezoneRef::Name(name.to_string())
    }
}

impl From<String> for TimezoneRef {
    fn from(name: String) -> Self {
        TimezoneRef::Name(name)
    }
}

impl From<Tz> for TimezoneRef {
    fn from(tz: Tz) -> Self {
        TimezoneRef::Resolved(tz)
    }
}

impl fmt::Display for TimezoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TimezoneRef {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TimezoneRef {
    /// Deserializes as an unresolved name; resolution stays on the call
    /// path, so any string is accepted here and a bad one surfaces as
    /// [`Error::UnknownTimezone`] when first used.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(TimezoneRef::Name(name))
    }
}
