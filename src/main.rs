// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chronogrid CLI entrypoint.
//!
//! Reads an event list and a chart config, writes the layout plan as JSON to stdout or to
//! `--out`. `--schema` prints the JSON schema of the plan instead.

use std::error::Error;
use std::path::PathBuf;

use chronogrid::format::{ingest_events, parse_event_records};
use chronogrid::{build_timeline, ChartConfig, LayoutPlan, TimelineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --events <events.json> --config <chart.toml|chart.json> [--out <plan.json>] [--showcase]\n  {program} --schema\n\n--showcase swaps the file's layout options for the poster preset and keeps its theme.\nLog verbosity follows RUST_LOG (default {DEFAULT_LOG_LEVEL}); logs go to stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    events: Option<PathBuf>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    showcase: bool,
    schema: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--events" => {
                if options.events.is_some() {
                    return Err(());
                }
                options.events = Some(args.next().ok_or(())?.into());
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?.into());
            }
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                options.out = Some(args.next().ok_or(())?.into());
            }
            "--showcase" => {
                if options.showcase {
                    return Err(());
                }
                options.showcase = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ => return Err(()),
        }
    }

    if options.schema {
        let layout_args = options.events.is_some() || options.config.is_some() || options.showcase;
        if layout_args {
            return Err(());
        }
        return Ok(options);
    }

    if options.events.is_none() || options.config.is_none() {
        return Err(());
    }

    Ok(options)
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let json = if options.schema {
        serde_json::to_string_pretty(&LayoutPlan::json_schema())?
    } else {
        let (Some(events_path), Some(config_path)) = (&options.events, &options.config) else {
            return Err("both --events and --config are required".into());
        };

        let chart = ChartConfig::load(config_path)?;
        let roster = chart.roster()?;
        let layout = if options.showcase {
            TimelineConfig { theme: chart.layout.theme.clone(), ..TimelineConfig::showcase() }
        } else {
            chart.layout.clone()
        };

        let raw = std::fs::read_to_string(events_path)
            .map_err(|err| format!("failed to read {}: {err}", events_path.display()))?;
        let records = parse_event_records(&raw)?;
        let events = ingest_events(&records, &roster)?;
        info!(
            records = records.len(),
            events = events.len(),
            characters = roster.len(),
            "loaded input"
        );

        let plan = build_timeline(&events, &roster, &layout)?;
        serde_json::to_string_pretty(&plan)?
    };

    match &options.out {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "chronogrid".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("chronogrid: {err}");
        std::process::exit(1);
    }
}
