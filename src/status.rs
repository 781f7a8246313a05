//! Data model of the serverinfo status document.
//!
//! The document is the read-only JSON tree returned by Nextcloud's
//! serverinfo app, shaped as `{"ocs": {"data": {...}}}`. Only the branches
//! the extractors read are modelled, and every branch under `ocs.data` is
//! independently optional so a single-metric plugin never depends on parts
//! of the document it does not look at. The mappings the extractors iterate
//! over keep the document's own key order.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PluginError;

/// Top-level serverinfo response.
#[derive(Debug, Deserialize)]
pub struct StatusDocument {
    pub ocs: Ocs,
}

#[derive(Debug, Deserialize)]
pub struct Ocs {
    pub data: OcsData,
}

#[derive(Debug, Deserialize)]
pub struct OcsData {
    /// Users seen in the last 5 minutes / hour / 24 hours.
    #[serde(rename = "activeUsers")]
    pub active_users: Option<Map<String, Value>>,
    pub nextcloud: Option<Nextcloud>,
    pub server: Option<Server>,
}

#[derive(Debug, Deserialize)]
pub struct Nextcloud {
    pub system: Option<System>,
    pub storage: Option<Map<String, Value>>,
    pub shares: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct System {
    /// Dotted server version, e.g. `"28.0.4.1"`.
    pub version: String,
    pub apps: Option<AppCounts>,
}

/// App counts; `num_updates_available` first appeared in Nextcloud 14.
#[derive(Debug, Deserialize)]
pub struct AppCounts {
    pub num_updates_available: u64,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub database: Option<Database>,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    /// Size in bytes; a number or a string depending on the DB backend.
    pub size: Value,
}

impl StatusDocument {
    /// Parse a serverinfo response body.
    pub fn from_json(body: &str) -> Result<Self, PluginError> {
        serde_json::from_str(body).map_err(|e| PluginError::Parse(e.to_string()))
    }

    /// `ocs.data.activeUsers`.
    pub fn active_users(&self) -> Result<&Map<String, Value>, PluginError> {
        self.ocs
            .data
            .active_users
            .as_ref()
            .ok_or(PluginError::MissingField("ocs.data.activeUsers"))
    }

    fn nextcloud(&self) -> Result<&Nextcloud, PluginError> {
        self.ocs
            .data
            .nextcloud
            .as_ref()
            .ok_or(PluginError::MissingField("ocs.data.nextcloud"))
    }

    fn system(&self) -> Result<&System, PluginError> {
        self.nextcloud()?
            .system
            .as_ref()
            .ok_or(PluginError::MissingField("ocs.data.nextcloud.system"))
    }

    /// `ocs.data.nextcloud.storage`.
    pub fn storage(&self) -> Result<&Map<String, Value>, PluginError> {
        self.nextcloud()?
            .storage
            .as_ref()
            .ok_or(PluginError::MissingField("ocs.data.nextcloud.storage"))
    }

    /// One fixed field out of `ocs.data.nextcloud.storage`.
    pub fn storage_field(&self, key: &'static str) -> Result<&Value, PluginError> {
        self.storage()?
            .get(key)
            .ok_or(PluginError::MissingField(key))
    }

    /// `ocs.data.nextcloud.shares`.
    pub fn shares(&self) -> Result<&Map<String, Value>, PluginError> {
        self.nextcloud()?
            .shares
            .as_ref()
            .ok_or(PluginError::MissingField("ocs.data.nextcloud.shares"))
    }

    /// `ocs.data.server.database.size`.
    pub fn database_size(&self) -> Result<&Value, PluginError> {
        self.ocs
            .data
            .server
            .as_ref()
            .and_then(|server| server.database.as_ref())
            .map(|database| &database.size)
            .ok_or(PluginError::MissingField("ocs.data.server.database.size"))
    }

    /// Major version parsed from the first dot-separated segment of
    /// `ocs.data.nextcloud.system.version`.
    pub fn version_major(&self) -> Result<u64, PluginError> {
        let version = &self.system()?.version;
        version
            .split('.')
            .next()
            .unwrap_or_default()
            .parse()
            .map_err(|_| PluginError::Parse(format!("bad version string `{version}`")))
    }

    /// `ocs.data.nextcloud.system.apps.num_updates_available`.
    ///
    /// Servers older than Nextcloud 14 do not report this block at all.
    pub fn app_updates(&self) -> Result<u64, PluginError> {
        self.system()?
            .apps
            .as_ref()
            .map(|apps| apps.num_updates_available)
            .ok_or(PluginError::MissingField("num_updates_available"))
    }
}
