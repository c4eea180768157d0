use std::collections::BTreeSet;

use kafka_partitioner::{BrokerId, ReassignmentPlan};
use parking_lot::Once;

/// Binary name passed as `argv[0]`.
pub const BIN: &str = "kafka-partitioner";

/// Output of a single CLI invocation.
#[derive(Debug)]
pub struct Invocation {
    pub code: u8,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    /// Parses stdout as a reassignment plan.
    pub fn plan(&self) -> ReassignmentPlan {
        assert_eq!(self.code, 0, "invocation failed: {}", self.stderr);
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("invalid plan {:?}: {e}", self.stdout))
    }
}

/// Runs the CLI adapter in-process the same way `main` does, minus logging setup.
pub fn invoke(args: &[&str]) -> Invocation {
    maybe_start_logging();

    let argv = std::iter::once(BIN).chain(args.iter().copied());
    let mut stdout = vec![];
    let mut stderr = vec![];

    let code = match kafka_partitioner::cli::parse(argv, &mut stdout, &mut stderr) {
        Ok(args) => kafka_partitioner::cli::execute(&args, &mut stdout, &mut stderr),
        Err(code) => code,
    };

    Invocation {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Generated random topic name for testing.
pub fn random_topic_name() -> String {
    format!("test_topic_{}", uuid::Uuid::new_v4())
}

/// Asserts the invariants every plan must hold.
pub fn assert_valid_plan(
    plan: &ReassignmentPlan,
    topic: &str,
    partition_count: usize,
    replication_factor: usize,
    brokers: &[BrokerId],
) {
    assert_eq!(plan.version, 1);
    assert_eq!(plan.partitions.len(), partition_count);

    for (i, partition) in plan.partitions.iter().enumerate() {
        assert_eq!(partition.topic, topic);
        assert_eq!(partition.partition, i as i32);
        assert_eq!(partition.log_dirs, vec!["any".to_owned()]);
        assert_eq!(partition.replicas.len(), replication_factor);

        let distinct: BTreeSet<_> = partition.replicas.iter().collect();
        assert_eq!(
            distinct.len(),
            replication_factor,
            "duplicate replica in {:?}",
            partition.replicas
        );
        assert!(
            partition.replicas.iter().all(|b| brokers.contains(b)),
            "{:?} not a subset of {:?}",
            partition.replicas,
            brokers
        );
    }
}

static LOG_SETUP: Once = Once::new();

/// Enables debug logging if the `RUST_LOG` environment variable is
/// set. Does nothing if `RUST_LOG` is not set.
pub fn maybe_start_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        start_logging()
    }
}

/// Start logging.
pub fn start_logging() {
    use tracing_log::LogTracer;
    use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

    LOG_SETUP.call_once(|| {
        LogTracer::init().unwrap();

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}
