//! Core data types for the consensus-round monitor.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod genesis;
mod status;
mod validator;
mod vote;

pub use genesis::{GenesisAliases, GenesisValidatorInfo};
pub use status::{NodeInfo, NodeStatusResponse, NodeStatusResult};
pub use validator::{ChainValidator, Validator, ValidatorWithInfo, Validators};
pub use vote::{Vote, VotePhase};

/// Voting power held by a validator.
///
/// Weights are arbitrary-precision: chains with very large stake
/// denominations routinely exceed the 64-bit range.
pub type VotingPower = num_bigint::BigUint;

/// An exact share of the total voting power, expressed as a percentage.
pub type PowerPercent = fraction::BigFraction;
