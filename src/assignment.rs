//! Replica selection policies.
//!
//! Both policies assume a validated request: a non-empty broker set and a
//! replication factor between 1 and the number of brokers. [`Planner`] checks
//! this before dispatching here.
//!
//! [`Planner`]: crate::planner::Planner

use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

use crate::{
    broker::BrokerId,
    error::{Error, Result},
};

/// Upper bound on random draws per requested replica.
///
/// With a uniform source and `replication_factor <= brokers` the expected number of draws for a
/// whole partition is below `brokers * ln(brokers) + brokers`, so this is only ever hit by a
/// degenerate source.
pub const MAX_DRAWS_PER_REPLICA: usize = 1_000;

/// How the replicas of a partition are picked from the broker set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AssignmentPolicy {
    /// Replica `i` of partition `p` is the broker at position `(p + i) mod n`.
    ///
    /// Deterministic. Consecutive partitions start one broker further, so leadership is spread
    /// round-robin over the broker set.
    #[default]
    Sequential,

    /// Brokers are drawn uniformly at random, rejecting those already picked for the partition.
    Random,
}

impl AssignmentPolicy {
    pub const ALL: [Self; 2] = [Self::Sequential, Self::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for AssignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown assignment policy \"{0}\", expected one of: sequential, random")]
pub struct UnknownPolicy(pub String);

impl FromStr for AssignmentPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPolicy(s.to_owned()))
    }
}

/// Rotating selection: `brokers[(partition + i) % brokers.len()]` for `i` in `0..replication_factor`.
pub(crate) fn sequential_replicas(
    partition: i32,
    replication_factor: usize,
    brokers: &[BrokerId],
) -> Vec<BrokerId> {
    debug_assert!(partition >= 0);
    debug_assert!((1..=brokers.len()).contains(&replication_factor));

    let n = brokers.len();
    let offset = partition as usize % n;
    (0..replication_factor)
        .map(|i| brokers[(offset + i) % n])
        .collect()
}

/// Rejection sampling of `replication_factor` distinct brokers.
pub(crate) fn random_replicas<R>(
    rng: &mut R,
    partition: i32,
    replication_factor: usize,
    brokers: &[BrokerId],
) -> Result<Vec<BrokerId>>
where
    R: Rng + ?Sized,
{
    debug_assert!((1..=brokers.len()).contains(&replication_factor));

    let max_draws = replication_factor.saturating_mul(MAX_DRAWS_PER_REPLICA);
    let mut replicas = Vec::with_capacity(replication_factor);
    let mut draws = 0;

    while replicas.len() < replication_factor {
        if draws == max_draws {
            return Err(Error::SamplingExhausted {
                partition,
                draws,
                selected: replicas,
            });
        }
        draws += 1;

        let candidate = brokers[rng.random_range(0..brokers.len())];
        if !replicas.contains(&candidate) {
            replicas.push(candidate);
        }
    }

    Ok(replicas)
}
