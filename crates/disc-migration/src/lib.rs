//! Type I planet-disc migration.
//!
//! A low-mass planet embedded in a gaseous disc exchanges angular momentum
//! with it and drifts in semi-major axis while its eccentricity and
//! inclination are damped. This crate turns the Tanaka & Ward (2004)
//! timescales into an acceleration that an N-body integrator can add to
//! gravity, with a planet trap at the inner disc edge where inward migration
//! stalls.
//!
//! Modules, leaves first:
//!
//! - [`disc`]: aspect ratio and surface density power laws
//! - [`timescales`]: wave, eccentricity and semi-major axis timescales
//! - [`trap`]: migration reversal near the inner disc edge
//! - [`evaluator`]: one particle against one reference body
//! - [`force`]: the [`nbody::forces::ForceModel`] applying the evaluator in
//!   a chosen reference frame
//!
//! ```
//! use disc_migration::{DiscParameters, MigrationConfig, TypeIMigration};
//! use nbody::forces::{CompositeForce, DirectGravity};
//! use nbody::frames::Coordinates;
//! use nbody::integrator::{Integrator, Leapfrog};
//! use nbody::state::SystemState;
//! use nalgebra::{Point3, Vector3};
//!
//! let mut system = SystemState::new(1.0);
//! system.add_body(1.0, Point3::origin(), Vector3::zeros());
//! system.add_body(1e-5, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
//!
//! let migration = TypeIMigration::from_config(&MigrationConfig {
//!     coordinates: Coordinates::Jacobi,
//!     disc: Some(DiscParameters {
//!         inner_disc_edge: 0.5,
//!         disc_edge_width: 0.05,
//!         beta: 0.0,
//!         alpha: 1.0,
//!         initial_disc_surface_density: 1e-7,
//!     }),
//! });
//! let forces = CompositeForce::new()
//!     .with_force(DirectGravity::new())
//!     .with_force(migration);
//!
//! Leapfrog::new().integrate(&mut system, 1e-3, 100, &forces).unwrap();
//! ```

pub mod config;
pub mod disc;
pub mod error;
pub mod evaluator;
pub mod force;
pub mod timescales;
pub mod trap;

#[cfg(test)]
mod evaluator_test;
#[cfg(test)]
mod trap_test;

pub use config::{DiscParameters, MigrationConfig};
pub use error::{MigrationError, Result};
pub use evaluator::{MigrationRates, ParticleOverrides, particle_acceleration};
pub use force::TypeIMigration;
