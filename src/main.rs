use std::env;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use nextcloud_munin::domain::Domain;
use nextcloud_munin::{plugin, settings};

/// Munin invokes a plugin with at most one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Declare the graphs instead of reporting values.
    Config,
    /// Report whether the plugin can run in this environment.
    Autoconf,
}

#[derive(Parser, Debug)]
#[command(name = "nextcloud-munin")]
#[command(about = "Munin plugins reporting Nextcloud serverinfo metrics")]
struct Args {
    /// Munin mode; fetches data when absent.
    #[arg(value_enum)]
    mode: Option<Mode>,
}

fn main() -> Result<()> {
    // Munin reads stdout, so logging goes to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let program = program_name();
    let domain = Domain::from_program_name(&program);
    let instance = settings::instance_from_env(&program);

    let lines = match args.mode {
        Some(Mode::Autoconf) => vec![plugin::autoconf().to_string()],
        Some(Mode::Config) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(plugin::config(domain, &instance))
        }
        None => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(plugin::fetch(domain, &instance))?
        }
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// File name the plugin was invoked under.
///
/// Munin encodes both the domain and the instance nickname in the symlink
/// name, so this is configuration, not cosmetics.
fn program_name() -> String {
    env::args()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}
