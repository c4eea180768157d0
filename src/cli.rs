//! Command line adapter: raw arguments in, plan or error message and exit status out.

use std::{
    ffi::OsString,
    io::{IsTerminal, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::{
    assignment::AssignmentPolicy,
    broker::{BrokerId, BrokerSet},
    plan::{DEFAULT_REPLICATION_FACTOR, PlanRequest},
    planner::Planner,
};

/// Exit status when the plan was written.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for any parse, validation or output error.
pub const EXIT_FAILURE: u8 = 1;

/// Compute a partition reassignment plan for a Kafka topic.
///
/// The plan is printed to stdout as JSON, ready for
/// `kafka-reassign-partitions --reassignment-json-file`.
#[derive(Debug, Parser)]
#[command(name = "kafka-partitioner", version, long_about = None)]
pub struct Args {
    /// Broker ID eligible to host replicas. Repeat the flag or pass a comma-separated list.
    #[arg(
        long = "broker",
        value_name = "ID",
        required = true,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub brokers: Vec<BrokerId>,

    /// Replication factor.
    #[arg(
        long = "rf",
        value_name = "N",
        default_value_t = DEFAULT_REPLICATION_FACTOR,
        allow_negative_numbers = true
    )]
    pub replication_factor: i16,

    /// Number of partitions.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub partitions: i32,

    /// The topic to reassign.
    #[arg(long)]
    pub topic: String,

    /// How replicas are picked: `sequential` rotates through the brokers, `random` samples them.
    #[arg(long, default_value_t = AssignmentPolicy::Sequential)]
    pub policy: AssignmentPolicy,

    /// Seed for the random policy. Defaults to the current time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON document.
    #[arg(long)]
    pub pretty: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Initialize logging on stderr, so that stdout only ever carries the plan.
    ///
    /// `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logging(&self) {
        let level_filter = if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };
        let filter_layer = EnvFilter::builder()
            .with_default_directive(level_filter.into())
            .from_env_lossy();
        let fmt_layer = log_layer(std::io::stderr, std::io::stderr().is_terminal());

        // Another subscriber may already be installed when embedded, keep it.
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }

    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest {
            topic: self.topic.clone(),
            partition_count: self.partitions,
            replication_factor: self.replication_factor,
            brokers: BrokerSet::new(self.brokers.iter().copied()),
            policy: self.policy,
        }
    }

    pub fn planner(&self) -> Planner {
        match self.seed {
            Some(seed) => Planner::with_seed(seed),
            None => Planner::new(),
        }
    }

    /// Build the plan and write it to `out`.
    pub fn run<W>(&self, out: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let request = self.plan_request();
        let plan = self
            .planner()
            .build_plan(&request)
            .with_context(|| format!("cannot plan topic \"{}\"", request.topic))?;
        plan.write_json(out, self.pretty)
            .context("error writing reassignment plan")?;
        Ok(())
    }
}

/// Formatting layer for log output. Colours are only used when `ansi` is set.
fn log_layer<S, W>(make_writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(make_writer)
}

/// Parse `argv`.
///
/// Help and version output go to `stdout`. On failure the rendered error is written to `stderr`
/// and the exit status is returned instead.
pub fn parse<I, T, O, E>(argv: I, stdout: &mut O, stderr: &mut E) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(e) if e.use_stderr() => {
            let _ = write!(stderr, "{}", e.render());
            Err(EXIT_FAILURE)
        }
        Err(e) => {
            let _ = write!(stdout, "{}", e.render());
            Err(EXIT_SUCCESS)
        }
    }
}

/// Run a parsed invocation and map the outcome to an exit status.
pub fn execute<O, E>(args: &Args, stdout: &mut O, stderr: &mut E) -> u8
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match args.run(stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Planning failed");
            let _ = writeln!(stderr, "{e:#}");
            EXIT_FAILURE
        }
    }
}
