//! Reduces a validator collection to round-level agreement metrics.
//!
//! Weights are summed exactly over arbitrary-precision integers and divided
//! once at the end, so results never depend on iteration order and carry no
//! floating-point drift.

use num_traits::Zero;

use roundwatch_core_types::{PowerPercent, Validators, Vote, VotePhase, VotingPower};

use crate::TallyError;

/// Sum of the voting power behind votes cast in the given phase.
///
/// Counts validators whose vote is [`Vote::Voted`], plus those whose vote is
/// [`Vote::VotedZero`] when `count_disagreeing` is set.
pub fn voted_power(
    validators: &Validators,
    phase: VotePhase,
    count_disagreeing: bool,
) -> VotingPower {
    validators
        .iter()
        .filter(|v| match v.vote_in(phase) {
            Vote::Voted => true,
            Vote::VotedZero => count_disagreeing,
            Vote::NotVoted => false,
        })
        .fold(VotingPower::zero(), |sum, v| sum + &v.voting_power)
}

/// Percentage of the total voting power behind votes cast in the given phase.
///
/// The result is an exact rational. Returns [`TallyError::DivisionByZero`]
/// when the total voting power is zero (empty collection, or every validator
/// has zero weight), leaving the caller to decide how to render the unknown
/// percentage.
pub fn voted_percent(
    validators: &Validators,
    phase: VotePhase,
    count_disagreeing: bool,
) -> Result<PowerPercent, TallyError> {
    let total = validators.total_voting_power();
    if total.is_zero() {
        return Err(TallyError::DivisionByZero);
    }

    let voted = voted_power(validators, phase, count_disagreeing);
    Ok(PowerPercent::new(voted * 100u32, total))
}

/// Percentage of the total voting power that prevoted in the current round.
pub fn prevoted_percent(
    validators: &Validators,
    count_disagreeing: bool,
) -> Result<PowerPercent, TallyError> {
    voted_percent(validators, VotePhase::Prevote, count_disagreeing)
}

/// Percentage of the total voting power that precommitted in the current round.
pub fn precommitted_percent(
    validators: &Validators,
    count_disagreeing: bool,
) -> Result<PowerPercent, TallyError> {
    voted_percent(validators, VotePhase::Precommit, count_disagreeing)
}
