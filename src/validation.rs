//! Precondition checks run before any replica is selected.

use crate::{
    broker::BrokerSet,
    error::{Error, Result},
    plan::PlanRequest,
};

/// Checks that `replication_factor` distinct brokers can be picked from `brokers`.
///
/// Returns the replication factor as a length.
pub fn check_replication(replication_factor: i16, brokers: &BrokerSet) -> Result<usize> {
    if brokers.is_empty() {
        return Err(Error::NoBrokers);
    }

    let rf = usize::try_from(replication_factor)
        .ok()
        .filter(|rf| *rf >= 1)
        .ok_or(Error::InvalidReplicationFactor(replication_factor))?;

    if rf > brokers.len() {
        return Err(Error::ReplicationFactorTooLarge {
            replication_factor,
            brokers: brokers.len(),
        });
    }

    Ok(rf)
}

/// Validates the whole request, independent of the policy.
///
/// Returns the replication factor as a length.
pub fn check_request(request: &PlanRequest) -> Result<usize> {
    let rf = check_replication(request.replication_factor, &request.brokers)?;

    if request.partition_count < 0 {
        return Err(Error::InvalidPartitionCount(request.partition_count));
    }

    if request.topic.is_empty() {
        return Err(Error::EmptyTopic);
    }

    Ok(rf)
}
