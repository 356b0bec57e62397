//! Egress IP Checker Library
//!
//! This library provides a small diagnostic sidecar that periodically asks
//! an address-echo service for the caller's externally-visible IP address
//! and logs the result on a fixed interval.

pub mod config;
pub mod errors;
pub mod observation;
pub mod poller;
pub mod source;

pub use config::Config;
pub use errors::{CheckerError, Result};
pub use observation::Observation;
pub use poller::Poller;
pub use source::{AddressSource, HttpAddressSource};
