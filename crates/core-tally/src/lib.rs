//! Voting-power aggregation over a round's validator set.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod aggregate;
mod error;

pub use aggregate::{precommitted_percent, prevoted_percent, voted_percent, voted_power};
pub use error::TallyError;

pub use roundwatch_core_types::{PowerPercent, VotingPower};
