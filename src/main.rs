// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Baseconv CLI entrypoint.
//!
//! By default this runs the interactive converter. `--convert <RADIX> <value>` prints the four
//! synchronized fields once and exits.

use std::env;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use baseconv::config::{AdConfig, AppConfig, Edition};
use baseconv::model::Radix;
use baseconv::services::Platform;
use baseconv::store::{PreferenceStore, Preferences};
use baseconv::sync::{ConverterSession, SyncOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_ENV: &str = "BASECONV_LOG_FILE";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--prefs <path>] [--paid] [--debug-ads] [--max-digits <n>]\n  {program} --convert <BIN|OCT|DEC|HEX> <value> [--max-digits <n>]\n\n--prefs selects the preferences file (default: <config-dir>/baseconv/preferences.json).\n--paid runs the ad-free edition.\n--debug-ads uses the test ad units.\n--max-digits caps the digits accepted per field (default 256)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    prefs: Option<String>,
    paid: bool,
    debug_ads: bool,
    max_digits: Option<usize>,
    convert: Option<(Radix, String)>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--prefs" => {
                if options.prefs.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.prefs = Some(path);
            }
            "--paid" => {
                if options.paid {
                    return Err(());
                }
                options.paid = true;
            }
            "--debug-ads" => {
                if options.debug_ads {
                    return Err(());
                }
                options.debug_ads = true;
            }
            "--max-digits" => {
                if options.max_digits.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let max_digits: usize = raw.parse().map_err(|_| ())?;
                if max_digits == 0 {
                    return Err(());
                }
                options.max_digits = Some(max_digits);
            }
            "--convert" => {
                if options.convert.is_some() {
                    return Err(());
                }
                let radix: Radix = args.next().ok_or(())?.parse().map_err(|_| ())?;
                let value = args.next().ok_or(())?;
                options.convert = Some((radix, value));
            }
            _ => return Err(()),
        }
    }

    if options.convert.is_some() && (options.prefs.is_some() || options.paid || options.debug_ads) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = env::args();
        let program = args.next().unwrap_or_else(|| "baseconv".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some((radix, value)) = options.convert {
            init_stderr_tracing();
            return run_convert(radix, &value, options.max_digits);
        }

        init_tracing();

        let store = match options.prefs {
            Some(path) => Some(PreferenceStore::new(path)),
            None => PreferenceStore::default_location(),
        };
        let preferences = match store.as_ref().map(PreferenceStore::load_or_init) {
            Some(Ok(preferences)) => preferences,
            Some(Err(err)) => {
                tracing::warn!(%err, "using default preferences");
                Preferences::default()
            }
            None => {
                tracing::warn!("no config directory; settings will not persist");
                Preferences::default()
            }
        };

        let edition = if options.paid {
            Edition::Paid
        } else {
            Edition::Free
        };
        let ads = if options.debug_ads {
            AdConfig::test()
        } else {
            AdConfig::production()
        };
        let mut config = AppConfig::new(edition, preferences).with_ads(ads);
        if let Some(max_digits) = options.max_digits {
            config = config.with_max_digits(max_digits);
        }
        tracing::info!(?edition, "starting converter");

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let handle = runtime.handle().clone();

        runtime.block_on(async move {
            // The runtime thread keeps driving ad loads while the TUI blocks on input.
            let tui_join = tokio::task::spawn_blocking(move || {
                let platform = Platform::system(&config, Some(handle));
                baseconv::tui::run(config, store, platform).map_err(|err| err.to_string())
            })
            .await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| Box::new(io::Error::other(err)) as Box<dyn Error>)?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("baseconv: {err}");
        std::process::exit(1);
    }
}

fn run_convert(radix: Radix, value: &str, max_digits: Option<usize>) -> Result<(), Box<dyn Error>> {
    let mut options = SyncOptions::default();
    if let Some(max_digits) = max_digits {
        options.max_digits = max_digits;
    }

    let mut session = ConverterSession::new(options);
    let bases = session.on_field_edited(radix, value)?;
    for base in bases {
        println!("{}: {}", base.label(), base.text());
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter())
        .init();
}

fn init_tracing() {
    let env_filter = env_filter();
    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than draw over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warnings.push(format!("failed to create log dir {}: {err}", parent.display()));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(err) => {
                warnings.push(format!("failed to open log file {}: {err}", candidate.display()));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env::var_os(LOG_FILE_ENV).filter(|value| !value.is_empty()) {
        candidates.push(PathBuf::from(path));
    }
    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(data_dir.join("baseconv").join("baseconv.log"));
    }
    candidates.push(PathBuf::from(".baseconv").join("baseconv.log"));

    candidates
}
