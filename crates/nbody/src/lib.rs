//! Cartesian N-body harness.
//!
//! Provides the pieces a perturbing force needs from its host simulation:
//! bodies with named parameters, the system state (including the
//! gravitational constant), orbit extraction relative to a reference body,
//! reference-frame reduction with back-reactions, and a leapfrog integrator
//! to drive everything.

pub mod body;
pub mod forces;
pub mod frames;
pub mod integrator;
pub mod orbit;
pub mod params;
pub mod state;


pub use body::{Body, BodyId};
pub use forces::{CompositeForce, DirectGravity, ForceError, ForceModel};
pub use frames::{Coordinates, com_force};
pub use integrator::{Integrator, Leapfrog};
pub use orbit::{Orbit, OrbitError, orbit_of};
pub use params::{ParamError, ParamValue, Params};
pub use state::{G_AU_YEAR, SystemState};
