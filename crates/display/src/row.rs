//! Fixed-width status rows for the dashboard's validator table.

use roundwatch_core_types::ValidatorWithInfo;

use crate::pad::{left_pad_and_trim, right_pad_and_trim};
use crate::resolver::AliasResolver;

/// Marker prefixed to validators voting under a delegated identity.
const ASSIGNED_MARKER: &str = "🔑 ";

const ORDINAL_WIDTH: usize = 3;
const PERCENT_WIDTH: usize = 6;
const NAME_WIDTH: usize = 25;

/// Renders one fixed-width text row per validator.
///
/// Name resolution prefers the chain-registry moniker and falls back to the
/// injected [`AliasResolver`], then to the raw consensus address. Rows are
/// newline-free and stable in width for any input.
pub struct StatusLineFormatter<R> {
    resolver: R,
}

impl<R> StatusLineFormatter<R>
where
    R: AliasResolver,
{
    /// Create a formatter using `resolver` as the name fallback.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Render the display row for a single validator.
    pub fn format_row(&self, row: &ValidatorWithInfo<'_>) -> String {
        let validator = row.validator;
        let ordinal = (validator.index + 1).to_string();
        let percent = format!("{:.2}", validator.voting_power_percent);

        format!(
            " {} {} {} {}% {} ",
            validator.prevote.symbol(),
            validator.precommit.symbol(),
            right_pad_and_trim(&ordinal, ORDINAL_WIDTH),
            right_pad_and_trim(&percent, PERCENT_WIDTH),
            left_pad_and_trim(&self.resolve_name(row), NAME_WIDTH),
        )
    }

    /// Render rows for a whole collection, preserving order.
    pub fn format_all(&self, rows: &[ValidatorWithInfo<'_>]) -> Vec<String> {
        rows.iter().map(|row| self.format_row(row)).collect()
    }

    fn resolve_name(&self, row: &ValidatorWithInfo<'_>) -> String {
        let Some(chain_validator) = row.chain_validator else {
            return self
                .resolver
                .resolve(&row.validator.address)
                .unwrap_or_else(|| row.validator.address.clone());
        };

        match chain_validator.assigned_address.as_deref() {
            Some(assigned) if !assigned.is_empty() => {
                format!("{ASSIGNED_MARKER}{}", chain_validator.moniker)
            }
            _ => chain_validator.moniker.clone(),
        }
    }
}
