use core::fmt;

use serde::{Deserialize, Serialize};

/// A validator's observed participation state in one phase of the current round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Vote {
    /// No vote has been seen from this validator.
    #[default]
    NotVoted,

    /// A vote carrying the validator's full weight.
    Voted,

    /// A signed vote whose recorded weight is zero or null.
    ///
    /// Does not count toward agreement under the strict counting policy.
    VotedZero,
}

impl Vote {
    /// The display glyph for this vote state.
    pub fn symbol(&self) -> &'static str {
        match self {
            Vote::Voted => "✅",
            Vote::VotedZero => "🤷",
            Vote::NotVoted => "❌",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the two voting phases of a consensus round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VotePhase {
    /// Votes for values which validators observe are valid for a given round.
    Prevote,

    /// Votes to commit to a particular value for a given round.
    Precommit,
}
