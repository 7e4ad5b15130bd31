//! Head-to-head comparison of the latest 0/1 and fractional results.

use knapforge_core::{Algorithm, ComparisonSummary, KnapsackError, Result, SolveResult};
use tracing::info;

/// Builds a [`ComparisonSummary`] from one result per algorithm.
///
/// Ties go to the fractional solver on both counts: the 0/1 solver is
/// reported faster only when strictly faster, and higher only when strictly
/// higher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonReporter;

impl ComparisonReporter {
    pub fn new() -> Self {
        Self
    }

    /// Compares the latest results.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::NotReady`] if either result is missing, and
    /// [`KnapsackError::AlgorithmMismatch`] if a result sits in the wrong slot.
    pub fn compare(
        &self,
        zero_one: Option<&SolveResult>,
        fractional: Option<&SolveResult>,
    ) -> Result<ComparisonSummary> {
        let zero_one = expect_result(zero_one, Algorithm::ZeroOne)?;
        let fractional = expect_result(fractional, Algorithm::Fractional)?;

        let faster = if zero_one.elapsed < fractional.elapsed {
            Algorithm::ZeroOne
        } else {
            Algorithm::Fractional
        };
        let higher_value = if zero_one.total_value > fractional.total_value {
            Algorithm::ZeroOne
        } else {
            Algorithm::Fractional
        };

        info!(
            event = "compare",
            zero_one_value = zero_one.total_value,
            fractional_value = fractional.total_value,
            faster = faster.as_str(),
            higher_value = higher_value.as_str(),
        );

        Ok(ComparisonSummary {
            zero_one_value: zero_one.total_value,
            fractional_value: fractional.total_value,
            zero_one_elapsed: zero_one.elapsed,
            fractional_elapsed: fractional.elapsed,
            faster,
            higher_value,
        })
    }
}

fn expect_result(result: Option<&SolveResult>, expected: Algorithm) -> Result<&SolveResult> {
    let result = result.ok_or(KnapsackError::NotReady { missing: expected })?;
    if result.algorithm != expected {
        return Err(KnapsackError::AlgorithmMismatch {
            expected,
            found: result.algorithm,
        });
    }
    Ok(result)
}

/// Compares the latest 0/1 and fractional results.
pub fn compare(
    last_zero_one: Option<&SolveResult>,
    last_fractional: Option<&SolveResult>,
) -> Result<ComparisonSummary> {
    ComparisonReporter::new().compare(last_zero_one, last_fractional)
}
