//! Validator alias resolution.
//!
//! Name lookups are injected into the formatter as a capability, keeping the
//! rendering core network-free. The production resolver fetches the
//! well-known genesis alias document over HTTP on every call; any failure
//! degrades to `None` and the caller falls back to the raw address.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use roundwatch_core_types::GenesisAliases;

use crate::config::ResolverConfig;

/// Resolve a validator's consensus address to a display alias.
pub trait AliasResolver {
    /// Return the alias for `address`, or `None` when unknown.
    ///
    /// A failed lookup and a genuinely absent address both come back as
    /// `None`; callers cannot distinguish them and fall back to the raw
    /// address either way.
    fn resolve(&self, address: &str) -> Option<String>;
}

impl<F> AliasResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, address: &str) -> Option<String> {
        self(address)
    }
}

/// Errors that can occur while fetching the genesis alias document.
///
/// These never escape the resolver: `resolve` absorbs them into `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    /// The document could not be fetched.
    #[error("failed to fetch the genesis alias document: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response was not a valid alias document.
    #[error("failed to decode the genesis alias document: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Cancellation signal for alias lookups.
///
/// Cloning hands out another handle to the same flag. Once cancelled, the
/// owning resolver answers `None` without touching the network, so an
/// abandoned polling cycle never blocks on a stale lookup.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Abort any further lookups through the associated resolver.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// [`AliasResolver`] backed by the remote genesis alias document.
///
/// Each lookup fetches and decodes the whole document; there is no cache and
/// no retry. Requests are bounded by the configured timeout.
pub struct GenesisAliasResolver {
    url: String,
    client: reqwest::blocking::Client,
    cancel: CancelHandle,
}

impl GenesisAliasResolver {
    /// Build a resolver from its configuration.
    pub fn new(config: &ResolverConfig) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LookupError::BuildClient)?;

        Ok(Self {
            url: config.url.clone(),
            client,
            cancel: CancelHandle::default(),
        })
    }

    /// A handle that aborts lookups when the polling cycle is abandoned.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    fn fetch(&self) -> Result<GenesisAliases, LookupError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(LookupError::Transport)?;

        let aliases: GenesisAliases = response.json().map_err(LookupError::Decode)?;
        debug!(count = aliases.len(), "Fetched genesis aliases");

        Ok(aliases)
    }
}

impl AliasResolver for GenesisAliasResolver {
    fn resolve(&self, address: &str) -> Option<String> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let aliases = match self.fetch() {
            Ok(aliases) => aliases,
            Err(err) => {
                warn!(%err, "Genesis alias lookup failed, falling back to raw address");
                return None;
            }
        };

        aliases
            .get(address)
            .map(|info| info.alias.clone())
            .filter(|alias| !alias.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_resolvers() {
        let resolver = |address: &str| (address == "known").then(|| "alias".to_string());

        assert_eq!(resolver.resolve("known"), Some("alias".to_string()));
        assert_eq!(resolver.resolve("unknown"), None);
    }

    #[test]
    fn cancelled_resolver_skips_the_network() {
        // The URL is unroutable; a cancelled resolver must not even try it.
        let config = ResolverConfig {
            url: "http://192.0.2.1/aliases.json".to_string(),
            timeout: std::time::Duration::from_millis(10),
        };

        let resolver = GenesisAliasResolver::new(&config).unwrap();
        resolver.cancel_handle().cancel();

        assert!(resolver.cancel_handle().is_cancelled());
        assert_eq!(resolver.resolve("tnam1qabc"), None);
    }

    #[test]
    fn cancel_handles_share_the_flag() {
        let handle = CancelHandle::default();
        let clone = handle.clone();

        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }
}
