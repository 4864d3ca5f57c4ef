// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! hubswitch: hub switchover toolkit

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use commands::{argocd, wait};
use exit_error::ExitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

#[derive(Parser)]
#[command(
    name = "hubswitch",
    version = VERSION,
    about = "Hub switchover toolkit: pause and resume Argo CD auto-sync, wait for control-plane phases",
    styles = color::styles(),
)]
struct Cli {
    /// Kube context to use (default: HS_KUBE_CONTEXT, then the kubeconfig current-context)
    #[arg(long, global = true)]
    context: Option<String>,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pause, resume and inspect Argo CD application auto-sync
    Argocd(argocd::ArgocdArgs),
    /// Wait for a control-plane resource to reach a phase
    Wait(wait::WaitArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = env::Config::resolve(cli.context);
    match cli.command {
        Commands::Argocd(args) => argocd::handle(args.command, &config).await,
        Commands::Wait(args) => wait::handle(args, &config).await,
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
