//! Type I migration as an N-body force.

use log::warn;
use nalgebra::Vector3;
use nbody::body::Body;
use nbody::forces::{ForceError, ForceModel};
use nbody::frames::{Coordinates, com_force};
use nbody::params::Params;
use nbody::state::SystemState;

use crate::config::{self, MigrationConfig, PRIMARY};
use crate::error::Result;
use crate::evaluator;

/// Name reported in [`ForceError`]s raised by this force.
pub const FORCE_NAME: &str = "type_I_migration";

/// Planet-disc interaction in the Type I regime.
///
/// The force owns a parameter store holding the disc model and the
/// coordinate frame. Each body (other than body 0, the disc host) is
/// evaluated against its reference in that frame, and the reaction goes back
/// to the bodies making up the reference, so total momentum is conserved.
///
/// # Examples
///
/// ```
/// use disc_migration::TypeIMigration;
/// use nbody::forces::ForceModel;
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body(1.0, Point3::origin(), Vector3::zeros());
/// let planet = system.add_body(1e-5, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
/// system.get_body_mut(planet).unwrap().params.set("tau_a", 1.0e4);
///
/// let accelerations = TypeIMigration::new().accelerations(&system).unwrap();
/// assert!(accelerations[1].y < 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeIMigration {
    params: Params,
}

impl TypeIMigration {
    /// Migration force with no disc: only particle overrides act.
    pub fn new() -> Self {
        Self { params: Params::new() }
    }

    pub fn from_config(config: &MigrationConfig) -> Self {
        Self {
            params: config.to_params(),
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access for reconfiguration between steps.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Validated, typed view of the current parameters.
    pub fn config(&self) -> Result<MigrationConfig> {
        MigrationConfig::from_params(&self.params)
    }

    pub fn coordinates(&self) -> Result<Coordinates> {
        config::coordinates(&self.params)
    }

    /// Acceleration of `particle` about `source`, see [`evaluator::particle_acceleration`].
    pub fn particle_acceleration(
        &self,
        g: f64,
        particle: &Body,
        source: &Body,
    ) -> Result<Vector3<f64>> {
        evaluator::particle_acceleration(g, particle, source, &self.params)
    }
}

impl ForceModel for TypeIMigration {
    fn accumulate(
        &self,
        state: &SystemState,
        accelerations: &mut [Vector3<f64>],
    ) -> std::result::Result<(), ForceError> {
        let coordinates = self.coordinates().map_err(|err| ForceError::config(FORCE_NAME, err))?;

        com_force(
            state,
            coordinates,
            true,
            PRIMARY,
            FORCE_NAME,
            accelerations,
            |particle, source| {
                self.particle_acceleration(state.g, particle, source).map_err(|err| {
                    warn!("{FORCE_NAME}: body {} at t = {}: {err}", particle.id, state.time);
                    ForceError::body(FORCE_NAME, particle.id, err)
                })
            },
        )
    }
}
