use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kafka_partitioner::{AssignmentPolicy, PlanRequest, Planner};

const PARTITIONS: [i32; 3] = [100, 1_000, 10_000];

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");

    for policy in AssignmentPolicy::ALL {
        for partitions in PARTITIONS {
            let request = PlanRequest::new("bench", partitions, 0..12)
                .with_replication_factor(3)
                .with_policy(policy);

            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), partitions),
                &request,
                |b, request| {
                    let mut planner = Planner::with_seed(0);
                    b.iter(|| planner.build_plan(black_box(request)).unwrap())
                },
            );
        }
    }

    group.finish();
}

pub fn serialize_benchmark(c: &mut Criterion) {
    let request = PlanRequest::new("bench", 10_000, 0..12).with_replication_factor(3);
    let plan = Planner::new().build_plan(&request).unwrap();

    c.bench_function("to_json", |b| b.iter(|| black_box(&plan).to_json(false).unwrap()));
}

criterion_group!(benches, criterion_benchmark, serialize_benchmark);
criterion_main!(benches);
