use thiserror::Error;

/// Errors that can be produced while aggregating voting power.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TallyError {
    /// The total voting power of the collection is zero, so agreement
    /// percentages are undefined.
    #[error("total voting power is zero")]
    DivisionByZero,
}
