//! The single serverinfo request of one invocation.

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::PluginError;
use crate::settings::Settings;
use crate::status::StatusDocument;

/// What one poll of the status endpoint produced.
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with a parsed serverinfo document.
    Document(Box<StatusDocument>),
    /// Any other status, mapped to its fixed diagnostic line.
    Diagnostic(&'static str),
}

/// Map a non-200 status to the diagnostic line Munin will see.
///
/// 996, 997 and 998 are Nextcloud-defined failure codes, not standard HTTP.
pub fn diagnostic_for_status(status: u16) -> &'static str {
    match status {
        996 => "server error",
        997 => "not authorized",
        998 => "not found",
        _ => "unknown error",
    }
}

/// Client for the serverinfo endpoint of one Nextcloud server.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: Client,
    settings: Settings,
}

impl StatusClient {
    pub fn new(settings: Settings) -> Result<Self, PluginError> {
        let client = Client::builder().build()?;
        Ok(Self { client, settings })
    }

    /// Issue the one GET of this run.
    ///
    /// Transport failures are errors; HTTP-level failures are diagnostics,
    /// because Munin expects a printable line either way and retries on its
    /// own polling schedule.
    pub async fn fetch(&self) -> Result<FetchOutcome, PluginError> {
        debug!(url = %self.settings.url, "requesting serverinfo");

        let response = self
            .client
            .get(&self.settings.url)
            .basic_auth(&self.settings.username, Some(&self.settings.password))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "serverinfo request rejected");
            return Ok(FetchOutcome::Diagnostic(diagnostic_for_status(
                status.as_u16(),
            )));
        }

        let body = response.text().await?;
        let document = StatusDocument::from_json(&body)?;
        Ok(FetchOutcome::Document(Box::new(document)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nextcloud_failure_codes() {
        assert_eq!(diagnostic_for_status(996), "server error");
        assert_eq!(diagnostic_for_status(997), "not authorized");
        assert_eq!(diagnostic_for_status(998), "not found");
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(diagnostic_for_status(401), "unknown error");
        assert_eq!(diagnostic_for_status(404), "unknown error");
        assert_eq!(diagnostic_for_status(500), "unknown error");
        assert_eq!(diagnostic_for_status(999), "unknown error");
    }
}
