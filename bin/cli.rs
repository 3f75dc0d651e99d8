use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::stderr;
use tracing::Level;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Play chess on the terminal.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Diagnostics at this level or above are logged to stderr.
    ///
    /// Logs share the terminal with the board, so only warnings are shown by default.
    #[clap(short, long, default_value_t = Level::WARN)]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Diagnostics from dependencies are never logged.
    fn filter(&self) -> Targets {
        Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
    }

    pub fn execute(self) -> Result<(), Anyhow> {
        let writer = layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(stderr);

        registry().with(self.filter()).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
