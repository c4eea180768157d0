use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    assignment::{AssignmentPolicy, random_replicas, sequential_replicas},
    broker::{BrokerId, BrokerSet},
    error::{Error, Result},
    plan::{PartitionReassignment, PlanRequest, ReassignmentPlan},
    validation::{check_replication, check_request},
};

/// Computes replica assignments.
///
/// The planner owns the random source used by [`AssignmentPolicy::Random`]. The sequential
/// policy never touches it.
#[derive(Debug)]
pub struct Planner<R = StdRng> {
    rng: R,
}

impl Planner<StdRng> {
    /// Create a new [`Planner`] seeded once from the current time.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a new [`Planner`] whose random assignments are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::new_with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Planner<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Planner<R> {
    pub fn new_with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Select the replicas of a single partition.
    ///
    /// Fails without selecting anything if the broker set is empty or cannot supply
    /// `replication_factor` distinct brokers.
    pub fn compute_replicas(
        &mut self,
        partition: i32,
        replication_factor: i16,
        brokers: &BrokerSet,
        policy: AssignmentPolicy,
    ) -> Result<Vec<BrokerId>> {
        let rf = check_replication(replication_factor, brokers)?;
        if partition < 0 {
            return Err(Error::InvalidPartitionIndex(partition));
        }

        self.select(partition, rf, brokers, policy)
    }

    /// Build the reassignment plan for all partitions of the requested topic.
    pub fn build_plan(&mut self, request: &PlanRequest) -> Result<ReassignmentPlan> {
        let rf = check_request(request)?;

        let partitions = (0..request.partition_count)
            .map(|partition| -> Result<PartitionReassignment> {
                let replicas = self.select(partition, rf, &request.brokers, request.policy)?;
                debug!(
                    topic = request.topic.as_str(),
                    partition,
                    ?replicas,
                    "Assigned replicas"
                );
                Ok(PartitionReassignment::new(
                    request.topic.as_str(),
                    partition,
                    replicas,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            topic = request.topic.as_str(),
            partitions = partitions.len(),
            replication_factor = rf,
            brokers = request.brokers.len(),
            policy = %request.policy,
            "Built reassignment plan",
        );

        Ok(ReassignmentPlan::new(partitions))
    }

    fn select(
        &mut self,
        partition: i32,
        rf: usize,
        brokers: &BrokerSet,
        policy: AssignmentPolicy,
    ) -> Result<Vec<BrokerId>> {
        match policy {
            AssignmentPolicy::Sequential => {
                Ok(sequential_replicas(partition, rf, brokers.as_slice()))
            }
            AssignmentPolicy::Random => {
                random_replicas(&mut self.rng, partition, rf, brokers.as_slice())
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
