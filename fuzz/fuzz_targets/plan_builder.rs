#![no_main]
use std::collections::BTreeSet;

use kafka_partitioner::{AssignmentPolicy, BrokerSet, PlanRequest, Planner};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    driver(data);
});

fn driver(data: &[u8]) {
    let [policy, rf, partitions, seed, brokers @ ..] = data else {
        return;
    };

    let policy = if policy & 1 == 0 {
        AssignmentPolicy::Sequential
    } else {
        AssignmentPolicy::Random
    };
    let replication_factor = i16::from(*rf as i8);
    let partition_count = i32::from(*partitions as i8);
    let broker_set = BrokerSet::new(brokers.iter().map(|b| i32::from(*b)));

    let request = PlanRequest {
        topic: "fuzz".to_owned(),
        partition_count,
        replication_factor,
        brokers: broker_set.clone(),
        policy,
    };

    let Ok(plan) = Planner::with_seed(u64::from(*seed)).build_plan(&request) else {
        assert!(
            broker_set.is_empty()
                || replication_factor < 1
                || replication_factor as usize > broker_set.len()
                || partition_count < 0
        );
        return;
    };

    assert_eq!(plan.partitions.len(), partition_count as usize);
    for (i, partition) in plan.partitions.iter().enumerate() {
        assert_eq!(partition.partition, i as i32);
        assert_eq!(partition.replicas.len(), replication_factor as usize);

        let distinct: BTreeSet<_> = partition.replicas.iter().collect();
        assert_eq!(distinct.len(), partition.replicas.len());
        assert!(partition.replicas.iter().all(|b| broker_set.contains(*b)));
    }
}
