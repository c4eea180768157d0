//! Planning request and the reassignment document handed to `kafka-reassign-partitions`.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    assignment::AssignmentPolicy,
    broker::{BrokerId, BrokerSet},
    error::Result,
};

/// Format version of the reassignment document.
pub const PLAN_VERSION: i32 = 1;

/// Log directory placeholder letting the broker pick any of its directories.
pub const ANY_LOG_DIR: &str = "any";

/// Replication factor used when the caller does not specify one.
pub const DEFAULT_REPLICATION_FACTOR: i16 = 3;

/// Everything needed to compute a plan for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// The topic to reassign.
    pub topic: String,

    /// Number of partitions, planned as indexes `0..partition_count`.
    pub partition_count: i32,

    /// Replicas per partition.
    pub replication_factor: i16,

    /// Brokers eligible to host replicas.
    pub brokers: BrokerSet,

    /// How replicas are picked.
    pub policy: AssignmentPolicy,
}

impl PlanRequest {
    /// Request using [`DEFAULT_REPLICATION_FACTOR`] and the sequential policy.
    pub fn new(
        topic: impl Into<String>,
        partition_count: i32,
        brokers: impl IntoIterator<Item = BrokerId>,
    ) -> Self {
        Self {
            topic: topic.into(),
            partition_count,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            brokers: BrokerSet::new(brokers),
            policy: AssignmentPolicy::default(),
        }
    }

    pub fn with_replication_factor(self, replication_factor: i16) -> Self {
        Self {
            replication_factor,
            ..self
        }
    }

    pub fn with_policy(self, policy: AssignmentPolicy) -> Self {
        Self { policy, ..self }
    }
}

/// Complete replica assignment for all partitions of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignmentPlan {
    /// Document format version, always [`PLAN_VERSION`].
    pub version: i32,

    /// One entry per partition, ordered by partition index.
    pub partitions: Vec<PartitionReassignment>,
}

impl ReassignmentPlan {
    pub fn new(partitions: Vec<PartitionReassignment>) -> Self {
        Self {
            version: PLAN_VERSION,
            partitions,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Writes the document followed by a newline.
    pub fn write_json<W>(&self, writer: &mut W, pretty: bool) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let json = self.to_json(pretty)?;
        writeln!(writer, "{json}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Target replicas of a single partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReassignment {
    /// The topic name
    pub topic: String,

    /// The partition index
    pub partition: i32,

    /// Brokers hosting the partition, preferred leader first
    pub replicas: Vec<BrokerId>,

    /// Log directory hints
    pub log_dirs: Vec<String>,
}

impl PartitionReassignment {
    pub fn new(topic: impl Into<String>, partition: i32, replicas: Vec<BrokerId>) -> Self {
        Self {
            topic: topic.into(),
            partition,
            replicas,
            log_dirs: vec![ANY_LOG_DIR.to_owned()],
        }
    }
}
