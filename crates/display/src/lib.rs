//! Fixed-width status rendering for the consensus-round dashboard.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod config;
mod pad;
mod resolver;
mod row;

pub use config::{ResolverConfig, DEFAULT_GENESIS_ALIASES_URL};
pub use pad::{left_pad_and_trim, right_pad_and_trim};
pub use resolver::{AliasResolver, CancelHandle, GenesisAliasResolver, LookupError};
pub use row::StatusLineFormatter;
