//! Metric extraction: serverinfo document in, Munin data lines out.
//!
//! Each domain pulls a fixed set of fields out of the document and renders
//! one `key.value value` line per field, with the instance suffix applied
//! to every key. Field order is fixed per domain; the mapping-driven
//! domains (users, shares, storage) report keys in document order.

use serde_json::Value;

use crate::domain::Domain;
use crate::error::PluginError;
use crate::instance::Instance;
use crate::status::StatusDocument;

/// Nextcloud began reporting pending app updates with major version 14.
pub const APP_UPDATES_SINCE_MAJOR: u64 = 14;

/// Render the data lines for one domain.
pub fn lines(
    domain: Domain,
    doc: &StatusDocument,
    instance: &Instance,
) -> Result<Vec<String>, PluginError> {
    let mut out = Vec::new();
    match domain {
        Domain::Multi => multi(doc, instance, &mut out)?,
        single => emit(single, doc, instance, &mut out)?,
    }
    Ok(out)
}

fn emit(
    domain: Domain,
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    match domain {
        Domain::Apps => apps(doc, instance, out),
        Domain::DbSize => dbsize(doc, instance, out),
        Domain::Files => files(doc, instance, out),
        Domain::Shares => shares(doc, instance, out),
        Domain::Storage => storage(doc, instance, out),
        Domain::Users => users(doc, instance, out),
        Domain::Multi => unreachable!("multi is dispatched by lines()"),
    }
}

/// One `key.value` line with the instance suffix applied to the key.
fn value_line(instance: &Instance, key: &str, value: impl std::fmt::Display) -> String {
    format!("{}.value {value}", instance.key(key))
}

/// JSON numbers as-is, JSON strings without the quotes.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn apps(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    // Servers older than 14 do not report pending app updates; emitting
    // nothing is the expected answer there, not an error.
    if doc.version_major()? < APP_UPDATES_SINCE_MAJOR {
        return Ok(());
    }
    out.push(value_line(instance, "num_updates_available", doc.app_updates()?));
    Ok(())
}

fn dbsize(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    out.push(value_line(instance, "db_size", render_value(doc.database_size()?)));
    Ok(())
}

fn files(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    out.push(value_line(
        instance,
        "num_files",
        render_value(doc.storage_field("num_files")?),
    ));
    Ok(())
}

fn shares(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    for (key, value) in doc.shares()? {
        if key.starts_with("num") {
            out.push(value_line(instance, key, render_value(value)));
        }
    }
    Ok(())
}

fn storage(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    for (key, value) in doc.storage()? {
        if key.starts_with("num_storages") {
            out.push(value_line(instance, key, render_value(value)));
        }
    }
    Ok(())
}

fn users(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    for (key, value) in doc.active_users()? {
        out.push(value_line(instance, key, render_value(value)));
    }
    out.push(value_line(
        instance,
        "num_users",
        render_value(doc.storage_field("num_users")?),
    ));
    Ok(())
}

/// All domains in one run, each block introduced by its multigraph marker.
///
/// The app-update block is dropped entirely (marker included) on pre-14
/// servers.
fn multi(
    doc: &StatusDocument,
    instance: &Instance,
    out: &mut Vec<String>,
) -> Result<(), PluginError> {
    for domain in Domain::MULTI_ORDER {
        if domain == Domain::Apps && doc.version_major()? < APP_UPDATES_SINCE_MAJOR {
            continue;
        }
        out.push(format!("multigraph {}{}", domain.graph_name(), instance.suffix));
        emit(domain, doc, instance, out)?;
    }
    Ok(())
}
