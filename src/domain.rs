//! The metric domains covered by the plugin family.

use crate::instance::BASE_NAME;

/// One Munin graph family served by this plugin.
///
/// Each single-metric domain corresponds to one installed plugin name
/// (`nextcloud_users`, `nextcloud_dbsize`, ...); [`Domain::Multi`] reports
/// all of them in one invocation using Munin's multigraph protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Available app updates (Nextcloud 14+).
    Apps,
    /// Database size in bytes.
    DbSize,
    /// Total number of files.
    Files,
    /// Share counts by kind.
    Shares,
    /// Storage counts by kind.
    Storage,
    /// Active user counts.
    Users,
    /// All of the above as one multigraph plugin.
    Multi,
}

impl Domain {
    /// The single-metric domains in multi's fixed reporting order.
    pub const MULTI_ORDER: [Domain; 6] = [
        Domain::Users,
        Domain::Shares,
        Domain::DbSize,
        Domain::Apps,
        Domain::Storage,
        Domain::Files,
    ];

    /// The word after `nextcloud_` in the canonical plugin name.
    pub fn word(self) -> &'static str {
        match self {
            Domain::Apps => "apps",
            Domain::DbSize => "dbsize",
            Domain::Files => "files",
            Domain::Shares => "shares",
            Domain::Storage => "storage",
            Domain::Users => "users",
            Domain::Multi => "multi",
        }
    }

    /// Canonical installed plugin name, e.g. `nextcloud_users`.
    pub fn plugin_name(self) -> String {
        format!("{BASE_NAME}_{}", self.word())
    }

    /// Graph name used in `multigraph` marker lines.
    ///
    /// These are fixed wire names; renaming one would orphan the RRD files
    /// Munin has already created for existing installations.
    pub fn graph_name(self) -> &'static str {
        match self {
            Domain::Apps => "nextcloud_available_updates",
            Domain::DbSize => "nextcloud_dbsize",
            Domain::Files => "nextcloud_filecount",
            Domain::Shares => "nextcloud_shares",
            Domain::Storage => "nextcloud_storages",
            Domain::Users => "nextcloud_users",
            Domain::Multi => "nextcloud_multi",
        }
    }

    /// Resolve the domain from the invoked program's file name.
    ///
    /// `nextcloud_users` and any renamed copy of it (`nextcloud_users_backup`)
    /// resolve to [`Domain::Users`]; a name matching no canonical plugin
    /// name reports everything, i.e. [`Domain::Multi`].
    pub fn from_program_name(program_name: &str) -> Domain {
        const ALL: [Domain; 7] = [
            Domain::Apps,
            Domain::DbSize,
            Domain::Files,
            Domain::Shares,
            Domain::Storage,
            Domain::Users,
            Domain::Multi,
        ];

        for domain in ALL {
            let canonical = domain.plugin_name();
            let is_copy = program_name
                .strip_prefix(canonical.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('_'));
            if is_copy {
                return domain;
            }
        }

        Domain::Multi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_resolve() {
        assert_eq!(Domain::from_program_name("nextcloud_users"), Domain::Users);
        assert_eq!(Domain::from_program_name("nextcloud_dbsize"), Domain::DbSize);
        assert_eq!(Domain::from_program_name("nextcloud_multi"), Domain::Multi);
    }

    #[test]
    fn test_renamed_copies_resolve() {
        assert_eq!(
            Domain::from_program_name("nextcloud_shares_backup"),
            Domain::Shares
        );
        assert_eq!(
            Domain::from_program_name("nextcloud_storage_web01"),
            Domain::Storage
        );
    }

    #[test]
    fn test_unknown_name_reports_everything() {
        assert_eq!(Domain::from_program_name("nextcloud_munin"), Domain::Multi);
        assert_eq!(Domain::from_program_name("whatever"), Domain::Multi);
    }

    #[test]
    fn test_multi_order() {
        let words: Vec<&str> = Domain::MULTI_ORDER.iter().map(|d| d.graph_name()).collect();
        assert_eq!(
            words,
            [
                "nextcloud_users",
                "nextcloud_shares",
                "nextcloud_dbsize",
                "nextcloud_available_updates",
                "nextcloud_storages",
                "nextcloud_filecount",
            ]
        );
    }
}
