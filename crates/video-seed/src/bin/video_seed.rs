//! Seed a running video API with fixture users and videos.
//!
//! Per-user failures are logged and do not change the exit status; the
//! process exits non-zero only when the run cannot start.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};
use video_seed::{SeedSettings, seed_from_settings};

fn main() -> ExitCode {
    let settings = match SeedSettings::load_from_iter(env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            write_stderr(&format!("invalid configuration: {err}"));
            return ExitCode::FAILURE;
        }
    };
    init_tracing(settings.json_logs);

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(seed_from_settings(&settings)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "seeding could not start");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if json_logs {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_stderr(message: &str) {
    if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
        drop(err);
    }
}
