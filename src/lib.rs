//! Typed client for the Pantheon hosting platform API
//!
//! Organizations, sites and domains are fetched as resource lists. Every list
//! implements [`client::Resource`], so [`client::PantheonClient::fetch`] can
//! populate any of them.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
