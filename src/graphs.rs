//! Munin graph declarations ("config" mode output).
//!
//! Each domain declares its graph with a fixed block of lines; only the
//! instance title and the per-metric key suffix vary. The declaration text
//! is frozen: changing a key or label would orphan the RRD files Munin has
//! already created for existing installations.

use crate::domain::Domain;
use crate::instance::Instance;

/// Render the config lines for one domain.
pub fn lines(domain: Domain, instance: &Instance) -> Vec<String> {
    match domain {
        Domain::Apps => apps(instance),
        Domain::DbSize => dbsize(instance),
        Domain::Files => files(instance),
        Domain::Shares => shares(instance),
        Domain::Storage => storage(instance),
        Domain::Users => users(instance),
        Domain::Multi => multi(instance),
    }
}

/// The standard `.label` / `.info` / `.min 0` triple for one metric.
fn metric(out: &mut Vec<String>, instance: &Instance, key: &str, label: &str, info: &str) {
    let key = instance.key(key);
    out.push(format!("{key}.label {label}"));
    out.push(format!("{key}.info {info}"));
    out.push(format!("{key}.min 0"));
}

fn users(instance: &Instance) -> Vec<String> {
    let mut out = vec![
        format!("graph_title Nextcloud User Activity{}", instance.title),
        "graph_args --base 1000 -l 0".to_string(),
        "graph_printf %.0lf".to_string(),
        "graph_vlabel connected users".to_string(),
        "graph_info graph showing the number of connected user".to_string(),
        "graph_category nextcloud".to_string(),
    ];
    for (key, label, info) in [
        (
            "last5minutes",
            "last 5 minutes",
            "users connected in the last 5 minutes",
        ),
        ("last1hour", "last hour", "users connected in the last hour"),
        (
            "last24hours",
            "last 24 hours",
            "users connected in the last 24 hours",
        ),
        ("num_users", "number of users", "total number of users"),
    ] {
        metric(&mut out, instance, key, label, info);
    }
    out
}

fn shares(instance: &Instance) -> Vec<String> {
    let mut out = vec![
        format!("graph_title Nextcloud Shares{}", instance.title),
        "graph_args --base 1000 -l 0".to_string(),
        "graph_printf %.0lf".to_string(),
        "graph_vlabel number of shares".to_string(),
        "graph_info graph showing the number of shares".to_string(),
        "graph_category nextcloud".to_string(),
    ];
    for (key, label, info) in [
        (
            "num_shares",
            "total number of shares",
            "current over all total of shares",
        ),
        ("num_shares_user", "user shares", "current total of user shares"),
        (
            "num_shares_groups",
            "group shares",
            "current total of group shares",
        ),
        (
            "num_shares_link",
            "link shares",
            "current total of shares through a link",
        ),
        ("num_shares_mail", "mail shares", "current total of mail shares"),
        ("num_shares_room", "room shares", "current total of room shares"),
        (
            "num_shares_link_no_password",
            "link shares without a password",
            "current total of shares through a link without a password protection",
        ),
        (
            "num_fed_shares_sent",
            "federated shares sent",
            "current total of federated shares sent",
        ),
        (
            "num_fed_shares_received",
            "federated shares recieved",
            "current total of federated shares recieved",
        ),
    ] {
        metric(&mut out, instance, key, label, info);
    }
    out
}

fn dbsize(instance: &Instance) -> Vec<String> {
    let key = instance.key("db_size");
    vec![
        format!("graph_title Nextcloud Database Size{}", instance.title),
        "graph_args --base 1024 -l 0".to_string(),
        "graph_vlabel size in byte".to_string(),
        "graph_info graph showing the database size in byte".to_string(),
        "graph_category nextcloud".to_string(),
        format!("{key}.label database size in byte"),
        format!("{key}.info users connected in the last 5 minutes"),
        format!("{key}.draw AREA"),
        format!("{key}.min 0"),
    ]
}

fn apps(instance: &Instance) -> Vec<String> {
    let key = instance.key("num_updates_available");
    vec![
        format!("graph_title Nextcloud available App updates{}", instance.title),
        "graph_args --base 1000 -l 0".to_string(),
        "graph_printf %.0lf".to_string(),
        "graph_vlabel updates available".to_string(),
        "graph_info graph showing the number of available app updates".to_string(),
        "graph_category nextcloud".to_string(),
        format!("{key}.label available app updates"),
        format!("{key}.info number of available app updates"),
        format!("{key}.min 0"),
        format!("{key}.warning 1"),
    ]
}

fn storage(instance: &Instance) -> Vec<String> {
    let mut out = vec![
        format!("graph_title Nextcloud Storages{}", instance.title),
        "graph_args --base 1000 -l 0".to_string(),
        "graph_printf %.0lf".to_string(),
        "graph_vlabel number".to_string(),
        "graph_info graph showing the number of storages".to_string(),
        "graph_category nextcloud".to_string(),
    ];
    for (key, label, info) in [
        (
            "num_storages",
            "total number of storages",
            "current over all total of storages",
        ),
        (
            "num_storages_local",
            "number of local storages",
            "current over all total of storage",
        ),
        (
            "num_storages_home",
            "number of home storages",
            "current over all total of storage",
        ),
        (
            "num_storages_other",
            "number of other storages",
            "current over all total of storage",
        ),
    ] {
        metric(&mut out, instance, key, label, info);
    }
    out
}

fn files(instance: &Instance) -> Vec<String> {
    let mut out = vec![
        format!("graph_title Nextcloud Files{}", instance.title),
        "graph_args --base 1000 -l 0".to_string(),
        "graph_printf %.0lf".to_string(),
        "graph_vlabel number of files".to_string(),
        "graph_info graph showing the number of files".to_string(),
        "graph_category nextcloud".to_string(),
    ];
    metric(
        &mut out,
        instance,
        "num_files",
        "number of files",
        "current number of files in the repository",
    );
    out
}

/// All six declarations, each introduced by its multigraph marker.
fn multi(instance: &Instance) -> Vec<String> {
    let mut out = Vec::new();
    for domain in Domain::MULTI_ORDER {
        out.push(format!("multigraph {}{}", domain.graph_name(), instance.suffix));
        out.extend(lines(domain, instance));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_config_block() {
        let out = lines(Domain::Users, &Instance::unnamed());
        assert_eq!(
            out[..6],
            [
                "graph_title Nextcloud User Activity",
                "graph_args --base 1000 -l 0",
                "graph_printf %.0lf",
                "graph_vlabel connected users",
                "graph_info graph showing the number of connected user",
                "graph_category nextcloud",
            ]
        );
        assert!(out.contains(&"last5minutes.label last 5 minutes".to_string()));
        assert!(out.contains(&"num_users.min 0".to_string()));
    }

    #[test]
    fn test_dbsize_uses_base_1024_and_area() {
        let out = lines(Domain::DbSize, &Instance::unnamed());
        assert!(out.contains(&"graph_args --base 1024 -l 0".to_string()));
        assert!(out.contains(&"db_size.draw AREA".to_string()));
        assert!(!out.iter().any(|l| l.starts_with("graph_printf")));
    }

    #[test]
    fn test_apps_warns_at_one_pending_update() {
        let out = lines(Domain::Apps, &Instance::unnamed());
        assert_eq!(out.last().unwrap(), "num_updates_available.warning 1");
    }

    #[test]
    fn test_shares_declares_all_nine_metrics() {
        let out = lines(Domain::Shares, &Instance::unnamed());
        let labels = out.iter().filter(|l| l.contains(".label ")).count();
        assert_eq!(labels, 9);
    }

    #[test]
    fn test_instance_changes_only_title_and_keys() {
        let plain = lines(Domain::Users, &Instance::unnamed());
        let named = lines(Domain::Users, &Instance::named("backup"));
        assert_eq!(plain.len(), named.len());

        for (p, n) in plain.iter().zip(named.iter()) {
            if p.starts_with("graph_title") {
                assert_eq!(n, &format!("{p} on backup"));
            } else if p.starts_with("graph_") {
                assert_eq!(p, n);
            } else {
                // metric declaration: same text, suffixed key
                let (p_key, p_rest) = p.split_once('.').unwrap();
                let (n_key, n_rest) = n.split_once('.').unwrap();
                assert_eq!(n_key, &format!("{p_key}_backup"));
                assert_eq!(p_rest, n_rest);
            }
        }
    }

    #[test]
    fn test_multi_prefixes_each_block_with_marker() {
        let out = lines(Domain::Multi, &Instance::unnamed());
        let markers: Vec<&str> = out
            .iter()
            .filter(|l| l.starts_with("multigraph "))
            .map(String::as_str)
            .collect();
        assert_eq!(
            markers,
            [
                "multigraph nextcloud_users",
                "multigraph nextcloud_shares",
                "multigraph nextcloud_dbsize",
                "multigraph nextcloud_available_updates",
                "multigraph nextcloud_storages",
                "multigraph nextcloud_filecount",
            ]
        );
        assert_eq!(out[0], "multigraph nextcloud_users");
        assert_eq!(out[1], "graph_title Nextcloud User Activity");
    }

    #[test]
    fn test_multi_marker_carries_suffix() {
        let out = lines(Domain::Multi, &Instance::named("backup"));
        assert!(out.contains(&"multigraph nextcloud_dbsize_backup".to_string()));
    }
}
