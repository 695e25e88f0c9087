//! Nearby departures server.
//!
//! A web service that answers: "which of my lines leave soon from the
//! stops around this address?"

pub mod concurrency;
pub mod config;
pub mod domain;
pub mod geocoding;
pub mod pipeline;
pub mod routing;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;
