// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lintloc", about = "Localize linter diagnostics", version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Translate linter JSON results read from FILE or stdin
	Translate {
		/// Results file; reads stdin when omitted
		file: Option<PathBuf>,

		/// Pretty-print the output
		#[arg(long)]
		pretty: bool,
	},

	/// Generate a dictionary patch skeleton from a missing-translation log
	Keys {
		/// JSON-lines log written by the missing-translation logger
		missing_log: PathBuf,

		/// Where to write the patch
		#[arg(long, default_value = commands::DEFAULT_PATCH_PATH)]
		out: PathBuf,

		/// Plugin the patch targets
		#[arg(long, default_value = "eslint")]
		plugin: String,

		/// Plugin version range the templates apply to
		#[arg(long, default_value = "*")]
		version_range: String,
	},

	/// Print version information
	Version,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let cli = Cli::parse();

	match cli.command {
		Command::Translate { file, pretty } => commands::translate(file.as_deref(), pretty),
		Command::Keys {
			missing_log,
			out,
			plugin,
			version_range,
		} => commands::keys(&missing_log, &out, &plugin, &version_range),
		Command::Version => {
			println!("lintloc {}", env!("CARGO_PKG_VERSION"));
			Ok(())
		}
	}
}
