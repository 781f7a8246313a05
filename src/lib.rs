//! # nextcloud-munin
//!
//! Munin plugins for monitoring a Nextcloud server through its serverinfo
//! status API.
//!
//! One binary serves a whole family of plugins. Munin selects the metric
//! domain by the name the executable is invoked under:
//!
//! - `nextcloud_users` - active user counts
//! - `nextcloud_shares` - share counts by kind
//! - `nextcloud_dbsize` - database size in bytes
//! - `nextcloud_apps` - pending app updates (Nextcloud 14+)
//! - `nextcloud_storage` - storage counts by kind
//! - `nextcloud_files` - total file count
//! - `nextcloud_multi` - all of the above via Munin's multigraph protocol
//!
//! A second Nextcloud server is monitored by installing another symlink
//! with a trailing nickname (`nextcloud_users_backup`) or by setting the
//! `instance` environment variable; the nickname becomes part of every
//! graph title and metric key.
//!
//! ## Configuration
//!
//! All settings come from the environment, the way Munin's `plugin-conf.d`
//! delivers them:
//!
//! ```text
//! [nextcloud_*]
//! env.url https://cloud.example.org/ocs/v2.php/apps/serverinfo/api/v1/info
//! env.username munin
//! env.password app-token
//! ```
//!
//! ## Protocol
//!
//! Per invocation the plugin either answers `config` (graph declarations,
//! plus an immediate data snapshot when `MUNIN_CAP_DIRTYCONFIG=1`),
//! `autoconf` (capability probe, no network), or - with no argument -
//! issues exactly one authenticated HTTP GET, extracts the domain's fields
//! from the returned JSON document and prints one `key.value value` line
//! per field. There is no retry, no caching and no state between runs; the
//! Munin master owns the polling schedule and the history.

pub mod client;
pub mod domain;
pub mod error;
pub mod graphs;
pub mod instance;
pub mod metrics;
pub mod plugin;
pub mod settings;
pub mod status;

pub use client::{FetchOutcome, StatusClient};
pub use domain::Domain;
pub use error::PluginError;
pub use instance::Instance;
pub use status::StatusDocument;
