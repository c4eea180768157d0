use thiserror::Error;

use crate::broker::BrokerId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a list of brokers is required")]
    NoBrokers,

    #[error("replication factor must be at least 1, got {0}")]
    InvalidReplicationFactor(i16),

    #[error(
        "replication factor {replication_factor} is larger than the number of brokers ({brokers}). bailing"
    )]
    ReplicationFactorTooLarge {
        replication_factor: i16,
        brokers: usize,
    },

    #[error("the number of partitions must not be negative, got {0}")]
    InvalidPartitionCount(i32),

    #[error("partition index must not be negative, got {0}")]
    InvalidPartitionIndex(i32),

    #[error("the topic to reassign is required")]
    EmptyTopic,

    #[error(
        "gave up sampling replicas for partition {partition} after {draws} draws (selected {selected:?})"
    )]
    SamplingExhausted {
        partition: i32,
        draws: usize,
        selected: Vec<BrokerId>,
    },

    #[error("cannot serialize plan")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot write plan")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
