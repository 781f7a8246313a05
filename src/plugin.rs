//! Mode dispatch: data fetch, "config", or "autoconf".
//!
//! Munin drives a plugin with at most one argument. Without one the plugin
//! reports values; `config` declares the graphs; `autoconf` answers whether
//! the plugin could run at all. Everything here returns the lines to print
//! so the modes stay testable without touching stdout.

use tracing::warn;

use crate::client::{FetchOutcome, StatusClient};
use crate::domain::Domain;
use crate::error::PluginError;
use crate::graphs;
use crate::instance::Instance;
use crate::metrics;
use crate::settings::{self, Settings};

/// Printed by `autoconf` when a credential variable is absent.
pub const AUTOCONF_MISSING_ENV: &str = "env variables are missing";

/// One data-fetch run: GET the status endpoint, then either metric lines
/// or a single diagnostic line.
pub async fn fetch(domain: Domain, instance: &Instance) -> Result<Vec<String>, PluginError> {
    let settings = Settings::from_env()?;
    let client = StatusClient::new(settings)?;

    let outcome = client.fetch().await?;
    report(domain, outcome, instance)
}

/// Lines for one fetch outcome: a rejected request yields its diagnostic
/// line and nothing else.
fn report(
    domain: Domain,
    outcome: FetchOutcome,
    instance: &Instance,
) -> Result<Vec<String>, PluginError> {
    match outcome {
        FetchOutcome::Document(doc) => metrics::lines(domain, &doc, instance),
        FetchOutcome::Diagnostic(message) => Ok(vec![message.to_string()]),
    }
}

/// "config" mode: the graph declarations, plus a data snapshot when the
/// collector advertised dirty-config support.
///
/// The declarations come out unconditionally. A failed snapshot fetch is
/// logged to stderr and dropped; Munin re-fetches the values on its own
/// schedule, but a config run must never lose the graph definition.
pub async fn config(domain: Domain, instance: &Instance) -> Vec<String> {
    let mut lines = graphs::lines(domain, instance);
    if settings::dirty_config_enabled() {
        match fetch(domain, instance).await {
            Ok(data) => lines.extend(data),
            Err(err) => warn!(error = %err, "dirty config snapshot failed"),
        }
    }
    lines
}

/// "autoconf" mode: `yes` when both credential variables are set.
///
/// Only presence is checked; bad credentials surface at fetch time. Never
/// performs network I/O.
pub fn autoconf() -> &'static str {
    if settings::credentials_present() {
        "yes"
    } else {
        AUTOCONF_MISSING_ENV
    }
}
