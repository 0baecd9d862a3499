pub mod aggregator;
pub mod batch;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator::PlayerAggregator;
pub use batch::{BatchRunner, BatchSummary};
