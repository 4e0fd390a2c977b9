use crate::validate::DiagnosticThresholds;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// a native solver problem of some kind (e.g. not registered)
    #[error("Problem with {solver} solver ({problem})")]
    LinearSolverProblem {
        solver: String,
        problem: &'static str,
    },
}

/// Settings for a [`SparseSolver`](crate::solver::SparseSolver).
///
/// Construct with the builder, e.g.
///
/// ```
/// use sparsedirect::solver::SolverSettingsBuilder;
///
/// let settings = SolverSettingsBuilder::default()
///     .direct_solve_method("auto".to_string())
///     .compute_residual(true)
///     .build()
///     .unwrap();
/// assert!(settings.diagnostics_enable);
/// ```
///
/// Fields not given to the builder take the values of [`SolverSettings::default()`].
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(default, build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    /// native solver backend by name, or "auto" for the first available
    pub direct_solve_method: String,

    /// run the numerical pre-flight assessment before each solve
    pub diagnostics_enable: bool,

    /// diagonal entries smaller than this in magnitude are logged
    pub pivot_warning_tolerance: f64,

    /// diagonal ratio below which a matrix is reported as singular
    pub singular_ratio_tolerance: f64,

    /// condition estimate above which a matrix is reported as singular
    pub condition_limit: f64,

    /// compute the residual ‖Ax - b‖∞ after a successful solve
    pub compute_residual: bool,
}

impl Default for SolverSettings {
    fn default() -> SolverSettings {
        SolverSettings {
            direct_solve_method: "auto".to_string(),
            diagnostics_enable: true,
            pivot_warning_tolerance: 1e-10,
            singular_ratio_tolerance: 1e-10,
            condition_limit: 1e15,
            compute_residual: false,
        }
    }
}

impl SolverSettings {
    /// Checks that all settings are legal.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_direct_solve_method(&self.direct_solve_method)?;
        validate_tolerance(self.pivot_warning_tolerance, "pivot_warning_tolerance")?;
        validate_tolerance(self.singular_ratio_tolerance, "singular_ratio_tolerance")?;
        validate_tolerance(self.condition_limit, "condition_limit")?;
        Ok(())
    }

    /// Thresholds passed to [`assess_with`](crate::validate::assess_with).
    pub fn diagnostic_thresholds(&self) -> DiagnosticThresholds {
        DiagnosticThresholds {
            singular_ratio: self.singular_ratio_tolerance,
            condition_limit: self.condition_limit,
            pivot_tolerance: self.pivot_warning_tolerance,
        }
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl SolverSettingsBuilder {
    /// check the fields that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref method) = self.direct_solve_method {
            validate_direct_solve_method(method)?;
        }
        if let Some(v) = self.pivot_warning_tolerance {
            validate_tolerance(v, "pivot_warning_tolerance")?;
        }
        if let Some(v) = self.singular_ratio_tolerance {
            validate_tolerance(v, "singular_ratio_tolerance")?;
        }
        if let Some(v) = self.condition_limit {
            validate_tolerance(v, "condition_limit")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

// Backend names are checked against the registry only when a
// solver is constructed, since backends are registered at runtime
fn validate_direct_solve_method(method: &str) -> Result<(), SettingsError> {
    if method.trim().is_empty() {
        return Err(SettingsError::BadFieldValue("direct_solve_method"));
    }
    Ok(())
}

fn validate_tolerance(value: f64, field: &'static str) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}
