//! Partition replica assignment planning for Kafka topics.
//!
//! Given a set of brokers, a partition count and a replication factor, a [`Planner`] picks the
//! replicas of every partition and produces a [`ReassignmentPlan`], the JSON document accepted by
//! `kafka-reassign-partitions --reassignment-json-file`.
//!
//! ```
//! use kafka_partitioner::{PlanRequest, Planner};
//!
//! let request = PlanRequest::new("orders", 2, [1, 2, 3]);
//! let plan = Planner::new().build_plan(&request).unwrap();
//!
//! assert_eq!(plan.partitions[0].replicas, vec![1, 2, 3]);
//! assert_eq!(plan.partitions[1].replicas, vec![2, 3, 1]);
//! ```
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rust_2018_idioms,
    unsafe_code
)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]
pub mod assignment;
pub mod broker;
pub mod cli;
pub mod error;
pub mod plan;
pub mod planner;
pub mod validation;

pub use assignment::AssignmentPolicy;
pub use broker::{BrokerId, BrokerSet};
pub use error::{Error, Result};
pub use plan::{PartitionReassignment, PlanRequest, ReassignmentPlan};
pub use planner::Planner;
