//! Per-server instance naming.
//!
//! Munin installs one executable (or symlink) per graph. Pointing the same
//! plugin at a second Nextcloud server is done by installing another copy
//! under a suffixed name such as `nextcloud_users_backup`; the trailing
//! segment then becomes part of every graph title and metric key so the two
//! servers never collide in the collector.

/// Base word shared by every canonical plugin name in this family.
pub const BASE_NAME: &str = "nextcloud";

/// Title and key suffix identifying one monitored Nextcloud server.
///
/// Derived once at startup and immutable for the rest of the run. The
/// unnamed (default) instance has both fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Human-readable graph title suffix, e.g. `" on backup"`.
    pub title: String,
    /// Machine-safe metric key suffix, e.g. `"_backup"`.
    pub suffix: String,
}

impl Instance {
    /// The unnamed instance: a single server, no disambiguation needed.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// An explicitly named instance.
    ///
    /// The name appears as-is in graph titles; the key suffix keeps only
    /// word characters so the collector never sees an invalid field name.
    pub fn named(name: &str) -> Self {
        Self {
            title: format!(" on {name}"),
            suffix: format!("_{}", sanitize(name)),
        }
    }

    /// Derive the instance from the invoked program's file name.
    ///
    /// The name is split on its last underscore. `nextcloud_users` splits
    /// into `nextcloud` + `users`, matches `base` and stays unnamed; a
    /// renamed copy `nextcloud_users_backup` splits into `nextcloud_users`
    /// + `backup` and is the instance `backup`. A name without an
    /// underscore has an empty prefix and is treated as its own trailing
    /// segment.
    pub fn derive(program_name: &str, base: &str) -> Self {
        let (prefix, trailing) = match program_name.rsplit_once('_') {
            Some((prefix, trailing)) => (prefix, trailing),
            None => ("", program_name),
        };

        if prefix == base {
            Self::unnamed()
        } else {
            Self::named(trailing)
        }
    }

    /// Apply this instance's suffix to a metric key: `key<suffix>`.
    pub fn key(&self, base: &str) -> String {
        format!("{base}{}", self.suffix)
    }
}

/// Strip every character outside `[A-Za-z0-9_]`.
fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
