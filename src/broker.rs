//! Broker identifiers and the de-duplicated set replicas are drawn from.

use std::collections::BTreeSet;

use tracing::warn;

/// Kafka node ID of a broker.
pub type BrokerId = i32;

/// Ordered set of brokers eligible to host replicas.
///
/// Keeps the order in which the brokers were supplied, so that the sequential
/// policy rotates through them in the order the operator listed them. Repeated
/// IDs are dropped, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerSet {
    ids: Vec<BrokerId>,
}

impl BrokerSet {
    pub fn new(ids: impl IntoIterator<Item = BrokerId>) -> Self {
        let mut seen = BTreeSet::new();
        let mut duplicates = vec![];
        let ids = ids
            .into_iter()
            .filter(|id| {
                let fresh = seen.insert(*id);
                if !fresh {
                    duplicates.push(*id);
                }
                fresh
            })
            .collect();

        if !duplicates.is_empty() {
            warn!(?duplicates, "Ignoring duplicate broker IDs");
        }

        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: BrokerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn as_slice(&self) -> &[BrokerId] {
        &self.ids
    }
}
