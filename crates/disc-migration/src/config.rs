//! Force and particle configuration.
//!
//! All settings live in the named parameter stores of `nbody`: one store per
//! force instance for the disc model, one per body for the timescale
//! overrides. They are re-read on every evaluation, so changing a parameter
//! between steps takes effect on the next step.
//!
//! Force parameters:
//!
//! | Key                            | Type        | Required                 |
//! |--------------------------------|-------------|--------------------------|
//! | `coordinates`                  | coordinates | no (Jacobi)              |
//! | `inner_disc_edge`              | float       | when the disc is used    |
//! | `disc_edge_width`              | float       | when the disc is used    |
//! | `beta`                         | float       | no (0, a flat disc)      |
//! | `alpha`                        | float       | when the disc is used    |
//! | `initial_disc_surface_density` | float       | when the disc is used    |
//!
//! Particle parameters `tau_a`, `tau_e` and `tau_inc` are read by
//! [`crate::evaluator::ParticleOverrides`].

use nbody::frames::Coordinates;
use nbody::params::Params;
use serde::{Deserialize, Serialize};

use crate::error::{MigrationError, Result};

pub const COORDINATES: &str = "coordinates";
pub const INNER_DISC_EDGE: &str = "inner_disc_edge";
pub const DISC_EDGE_WIDTH: &str = "disc_edge_width";
pub const BETA: &str = "beta";
pub const ALPHA: &str = "alpha";
pub const INITIAL_DISC_SURFACE_DENSITY: &str = "initial_disc_surface_density";

pub const TAU_A: &str = "tau_a";
pub const TAU_E: &str = "tau_e";
pub const TAU_INC: &str = "tau_inc";

/// Name of the body flag marking reference bodies in particle coordinates.
pub const PRIMARY: &str = "primary";

const DISC_KEYS: [&str; 5] = [
    INNER_DISC_EDGE,
    DISC_EDGE_WIDTH,
    BETA,
    ALPHA,
    INITIAL_DISC_SURFACE_DENSITY,
];

/// Power-law disc with a planet trap at its inner edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscParameters {
    /// Radius of the inner disc edge (code length units)
    pub inner_disc_edge: f64,
    /// Fractional half-width h of the trap zone, 0 < h < 1
    pub disc_edge_width: f64,
    /// Aspect ratio power-law index
    #[serde(default)]
    pub beta: f64,
    /// Surface density power-law index
    pub alpha: f64,
    /// Surface density at unit radius (code mass / length²)
    pub initial_disc_surface_density: f64,
}

impl DiscParameters {
    /// Reads the disc from a force's parameter store.
    ///
    /// Returns `Ok(None)` when no disc key is set. Once any disc key is set
    /// the disc counts as configured, and every required key must be present
    /// and valid.
    pub fn from_params(params: &Params) -> Result<Option<Self>> {
        if !DISC_KEYS.iter().any(|key| params.contains(key)) {
            return Ok(None);
        }

        let disc = DiscParameters {
            inner_disc_edge: required(params, INNER_DISC_EDGE)?,
            disc_edge_width: required(params, DISC_EDGE_WIDTH)?,
            beta: params.get_float(BETA)?.unwrap_or(0.0),
            alpha: required(params, ALPHA)?,
            initial_disc_surface_density: required(params, INITIAL_DISC_SURFACE_DENSITY)?,
        };
        disc.validate()?;

        Ok(Some(disc))
    }

    /// Writes every disc key into `params`, replacing previous values.
    pub fn write_params(&self, params: &mut Params) {
        params.set(INNER_DISC_EDGE, self.inner_disc_edge);
        params.set(DISC_EDGE_WIDTH, self.disc_edge_width);
        params.set(BETA, self.beta);
        params.set(ALPHA, self.alpha);
        params.set(INITIAL_DISC_SURFACE_DENSITY, self.initial_disc_surface_density);
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.inner_disc_edge > 0.0 && self.inner_disc_edge.is_finite()) {
            return Err(MigrationError::configuration(
                INNER_DISC_EDGE,
                format!("{}, must be positive", self.inner_disc_edge),
            ));
        }
        if !(self.disc_edge_width > 0.0 && self.disc_edge_width < 1.0) {
            return Err(MigrationError::configuration(
                DISC_EDGE_WIDTH,
                format!("{}, must lie strictly between 0 and 1", self.disc_edge_width),
            ));
        }
        if !self.beta.is_finite() {
            return Err(MigrationError::configuration(
                BETA,
                format!("{}, must be finite", self.beta),
            ));
        }
        if !self.alpha.is_finite() {
            return Err(MigrationError::configuration(
                ALPHA,
                format!("{}, must be finite", self.alpha),
            ));
        }
        let sigma0 = self.initial_disc_surface_density;
        if !(sigma0 > 0.0 && sigma0.is_finite()) {
            return Err(MigrationError::configuration(
                INITIAL_DISC_SURFACE_DENSITY,
                format!("{sigma0}, must be positive"),
            ));
        }
        Ok(())
    }
}

/// Typed view of a migration force's parameter store.
///
/// # Examples
///
/// ```
/// use disc_migration::config::{DiscParameters, MigrationConfig};
/// use nbody::frames::Coordinates;
///
/// let config = MigrationConfig {
///     coordinates: Coordinates::Jacobi,
///     disc: Some(DiscParameters {
///         inner_disc_edge: 0.1,
///         disc_edge_width: 0.02,
///         beta: 0.0,
///         alpha: 1.0,
///         initial_disc_surface_density: 1.5e-4,
///     }),
/// };
///
/// let params = config.to_params();
/// assert_eq!(MigrationConfig::from_params(&params).unwrap(), config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfig {
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub disc: Option<DiscParameters>,
}

impl MigrationConfig {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(MigrationConfig {
            coordinates: coordinates(params)?,
            disc: DiscParameters::from_params(params)?,
        })
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.set(COORDINATES, self.coordinates);
        if let Some(disc) = &self.disc {
            disc.write_params(&mut params);
        }
        params
    }
}

/// Coordinate frame requested by a force's parameters, Jacobi when unset.
pub fn coordinates(params: &Params) -> Result<Coordinates> {
    Ok(params.get_coordinates(COORDINATES)?.unwrap_or_default())
}

fn required(params: &Params, key: &str) -> Result<f64> {
    params
        .get_float(key)?
        .ok_or_else(|| MigrationError::configuration(key, "required by the disc model but not set"))
}
