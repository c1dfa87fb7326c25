// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/gateway/mod.rs
//!
//! Data gateway to the Kezan Protocol API
//!
//! Resolves named resource fetches against the backend's JSON API. Uses
//! synchronous HTTP (ureq) to be executor-agnostic; each fetch is
//! independent and idempotent, so callers may issue them in any order.
//!
//! Two entry points with one deliberate difference:
//! - `try_fetch` surfaces a `GatewayError` distinguishing transport,
//!   status, and parse failures
//! - `fetch` collapses every failure to an empty record list, logging a
//!   warning; it never returns an error. The dashboard renders "no data"
//!   either way, so its callers cannot (and need not) distinguish an empty
//!   dataset from a failed fetch.
//!
//! No caching, no retries, no backoff: re-fetching yields the latest
//! server state.
//!
//! # Example
//! ```no_run
//! use kezan_protocol::gateway::{ApiGateway, Resource};
//! use std::time::Duration;
//!
//! let gateway = ApiGateway::new("http://localhost:8000/api", Duration::from_secs(10));
//! let deals = gateway.fetch(Resource::Deals);
//! println!("{} deals on the board", deals.len());
//! ```

pub mod error;

pub use error::GatewayError;

use serde_json::Value;
use std::fmt;
use std::time::Duration;
use ureq::Agent;

/// The dashboard's three data feeds.
///
/// Each maps to a fixed path suffix on the configured base URL. The path
/// names are the backend's (Spanish) route names; the variants carry the
/// dashboard-facing names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    /// Trading advice for the current auction snapshot
    Advice,
    /// Underpriced auctions with the best margins
    Deals,
    /// Profitable crafting recipes
    Craftables,
}

impl Resource {
    /// All resources, in display order
    pub const ALL: [Resource; 3] = [Resource::Advice, Resource::Deals, Resource::Craftables];

    /// Path suffix for this resource on the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Advice => "/consejo",
            Resource::Deals => "/gangas",
            Resource::Craftables => "/crafteables",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Advice => write!(f, "advice"),
            Resource::Deals => write!(f, "deals"),
            Resource::Craftables => write!(f, "craftables"),
        }
    }
}

/// One record from a feed. Shape is owned by the API, not validated here.
pub type Record = Value;

/// HTTP gateway for the dashboard's data feeds.
pub struct ApiGateway {
    agent: Agent,
    base_url: String,
}

impl ApiGateway {
    /// Creates a gateway for the given base URL.
    ///
    /// The timeout applies per request; a stalled feed degrades to
    /// "no data" through `fetch` instead of hanging the caller.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    /// Base URL this gateway resolves resources against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a resource, surfacing failures.
    ///
    /// # Errors
    ///
    /// - `GatewayError::Status` for non-success HTTP statuses (the body is
    ///   not inspected, and there is no retry)
    /// - `GatewayError::Transport` for connect/DNS/timeout failures
    /// - `GatewayError::Parse` when the body is not a JSON array
    pub fn try_fetch(&self, resource: Resource) -> Result<Vec<Record>, GatewayError> {
        let url = format!("{}{}", self.base_url, resource.path());

        let mut response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => GatewayError::Status(code),
            other => GatewayError::Transport(other.to_string()),
        })?;

        let records: Vec<Record> = response
            .body_mut()
            .read_json()
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        Ok(records)
    }

    /// Fetches a resource, collapsing every failure to an empty list.
    ///
    /// This is the dashboard contract: the caller always gets a record
    /// list and never an error. The collapsed failure is logged.
    pub fn fetch(&self, resource: Resource) -> Vec<Record> {
        match self.try_fetch(resource) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("fetch '{}' failed, returning no data: {}", resource, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests;
