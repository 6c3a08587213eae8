pub mod aggregator;
pub mod client;
pub mod models;

pub use aggregator::build_snapshot;
pub use client::VrmlClient;
