// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ontime daemon (ontimed)
//!
//! Hosts one input-driven daily schedule: ticks the cron trigger on an
//! interval and accepts input changes as line commands on stdin.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod command;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ontime_core::{
    Clock, ComponentRegistry, ScheduleConfig, ScheduleCoordinator, SystemClock,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::command::{Flow, HostCommand};

#[derive(Parser)]
#[command(
    name = "ontimed",
    version,
    about = "Run a daily schedule whose time and weekdays can change live"
)]
struct Cli {
    /// Schedule config file (TOML)
    #[arg(long, short)]
    config: PathBuf,

    /// Validate the config, print the schedule and next run, then exit
    #[arg(long)]
    check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = ScheduleConfig::load(&cli.config)
        .with_context(|| format!("invalid config {}", cli.config.display()))?;

    let coordinator = ScheduleCoordinator::new(
        SystemClock,
        config.build_inputs(),
        config.build_actions(),
    );
    let mut registry = ComponentRegistry::new();
    coordinator.initialize(&mut registry);

    if cli.check {
        print_schedule(&coordinator);
        return Ok(());
    }

    info!(
        config = %cli.config.display(),
        tick = ?config.tick_interval,
        "Starting ontimed"
    );

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => registry.loop_once(),

            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    if handle_line(&line, &coordinator) == Flow::Quit {
                        info!("Quit requested, shutting down...");
                        break;
                    }
                }
                Ok(None) => {
                    info!("stdin closed, no further commands");
                    stdin_open = false;
                }
                Err(e) => {
                    warn!(error = %e, "failed to read stdin, no further commands");
                    stdin_open = false;
                }
            },

            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down...");
                break;
            }

            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down...");
                break;
            }
        }
    }

    info!("ontimed stopped");
    Ok(())
}

/// Parse and apply one stdin command; errors are reported and ignored
fn handle_line<C: Clock + 'static>(line: &str, coordinator: &ScheduleCoordinator<C>) -> Flow {
    if line.trim().is_empty() {
        return Flow::Continue;
    }
    match line.parse::<HostCommand>().and_then(|cmd| cmd.apply(coordinator)) {
        Ok(Flow::Dump) => {
            for diagnostic in coordinator.diagnostics() {
                println!("{}", diagnostic);
            }
            print_schedule(coordinator);
            Flow::Continue
        }
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("error: {}", e);
            Flow::Continue
        }
    }
}

fn print_schedule<C: Clock + 'static>(coordinator: &ScheduleCoordinator<C>) {
    let Some(trigger) = coordinator.trigger() else {
        println!("Schedule: none");
        return;
    };
    println!("Schedule: {}", trigger.rule());
    match trigger.next_fire() {
        Some(next) => println!("Next run: {}", next),
        None => println!("Next run: never"),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
