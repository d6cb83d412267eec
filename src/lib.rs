//! Ascend: Auto Scale group setup
//!
//! A library for creating a cloud autoscale group together with its
//! scaling policies and one webhook per policy, in a single run.

pub mod autoscale;
pub mod config;
pub mod identity;
pub mod provision;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_logs;
