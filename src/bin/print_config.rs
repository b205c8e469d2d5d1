// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolves the registration service configuration and prints it.
//!
//! # Usage
//!
//! ```bash
//! print-config --config /etc/registration-service/config.yaml
//! print-config --key verification.daily_limit
//! ```
//!
//! Without `--key` the resolved configuration is logged the same way the
//! service logs it at startup. Secret values are never printed.

use clap::Parser;
use registration_config::domain::options::ENV_PREFIX;
use registration_config::logging::init_logging;
use registration_config::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "print-config")]
#[command(about = "Print the resolved registration service configuration")]
struct Args {
    /// YAML configuration file, read on top of all other sources
    #[arg(long, env = "REGISTRATION_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Directory where the secret is mounted
    #[arg(long, default_value = DEFAULT_SECRET_DIR)]
    secret_dir: PathBuf,

    /// Directory where the config map is mounted
    #[arg(long, default_value = DEFAULT_CONFIG_MAP_DIR)]
    config_map_dir: PathBuf,

    /// Prefix of the environment variables
    #[arg(long, default_value = ENV_PREFIX)]
    env_prefix: String,

    /// Print the resolved value of a single key instead
    #[arg(long)]
    key: Option<String>,
}

fn run(args: Args) -> Result<()> {
    let secret = MountedDirLoader::new(&args.secret_dir);
    let config_map = MountedDirLoader::new(&args.config_map_dir);

    let mut builder = RegistrationConfig::builder()
        .with_secret_loader(&secret)
        .with_config_map_loader(&config_map)
        .with_env_prefix(args.env_prefix);
    if let Some(path) = &args.config {
        builder = builder.with_config_file(path);
    }
    let config = builder.build()?;

    match args.key {
        Some(key) => {
            let value = config.get(&ConfigKey::from(key))?;
            println!("{}", value);
        }
        None => {
            init_logging(&config)?;
            config.print_config();
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
