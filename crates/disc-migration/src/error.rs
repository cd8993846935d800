use nbody::orbit::OrbitError;
use nbody::params::ParamError;
use thiserror::Error;

/// Errors raised while evaluating the migration force for one particle.
///
/// None of these are recovered from locally: substituting a "reasonable"
/// timescale would silently corrupt the energy and angular momentum budget
/// of the integration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MigrationError {
    /// A physical input is outside the domain of the disc model.
    ///
    /// For example a non-positive radius or mass, or an eccentricity at or
    /// beyond the singularity of the torque-reversal factor.
    #[error("{quantity} is outside the model domain: {reason}")]
    Domain { quantity: &'static str, reason: String },

    /// A parameter needed on the current evaluation path is missing or invalid.
    #[error("parameter `{key}`: {reason}")]
    Configuration { key: String, reason: String },

    /// The particle's orbital elements could not be determined.
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

impl MigrationError {
    pub(crate) fn domain(quantity: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            quantity,
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<ParamError> for MigrationError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::WrongType { key, expected, found } => Self::Configuration {
                key,
                reason: format!("expected a {expected} value, found {found}"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
