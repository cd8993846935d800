//! Orbital elements of a body relative to a reference body.
//!
//! Positions and velocities are integrated in Cartesian coordinates (no
//! singularities). Forces that are naturally expressed in terms of orbital
//! elements extract the few elements they need here, from the state of a
//! body relative to its reference (a star, or a center of mass).
//!
//! Only bound orbits are supported: forces built on orbital elements are
//! undefined for parabolic or hyperbolic encounters, so those configurations
//! are reported as errors instead of being clamped.

use thiserror::Error;

use crate::body::{Body, BodyId};

/// Relative specific energies with |ε| below this fraction of μ/r are
/// treated as parabolic.
const PARABOLIC_TOLERANCE: f64 = 1e-12;

/// The relative state of two bodies does not define an elliptic orbit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("body {body} coincides with its reference body")]
    ZeroSeparation { body: BodyId },

    #[error("body {body}: combined mass with its reference is {mass}, must be positive")]
    NonPositiveMass { body: BodyId, mass: f64 },

    #[error("body {body} is not bound to its reference (specific energy {energy})")]
    Unbound { body: BodyId, energy: f64 },

    #[error("body {body} has a non-finite position or velocity relative to its reference")]
    NonFinite { body: BodyId },
}

/// Size, shape and tilt of an elliptic orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Semi-major axis (code length units)
    pub a: f64,
    /// Eccentricity, 0 ≤ e < 1
    pub e: f64,
    /// Inclination relative to the reference plane z = 0 (radians)
    pub inc: f64,
}

/// Computes the orbit of `body` about `primary`.
///
/// Uses the two-body gravitational parameter μ = G (m + m_primary).
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::orbit::orbit_of;
///
/// let star = Body::new(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
/// let planet = Body::new(0.0, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
///
/// let orbit = orbit_of(1.0, &planet, &star).unwrap();
/// assert!((orbit.a - 1.0).abs() < 1e-12);
/// assert!(orbit.e < 1e-12);
/// ```
pub fn orbit_of(g: f64, body: &Body, primary: &Body) -> Result<Orbit, OrbitError> {
    let mu = g * (body.mass + primary.mass);
    if mu.is_nan() || mu <= 0.0 {
        return Err(OrbitError::NonPositiveMass {
            body: body.id,
            mass: body.mass + primary.mass,
        });
    }

    let r_vec = body.position - primary.position;
    let v_vec = body.velocity - primary.velocity;

    if !r_vec.iter().chain(v_vec.iter()).all(|c| c.is_finite()) {
        return Err(OrbitError::NonFinite { body: body.id });
    }

    let r = r_vec.magnitude();
    if r == 0.0 {
        return Err(OrbitError::ZeroSeparation { body: body.id });
    }

    // Specific orbital energy: ε = v²/2 - μ/r
    let energy = v_vec.magnitude_squared() / 2.0 - mu / r;
    if energy >= -PARABOLIC_TOLERANCE * mu / r {
        return Err(OrbitError::Unbound {
            body: body.id,
            energy,
        });
    }

    let a = -mu / (2.0 * energy);

    // Eccentricity vector: e = (v × h)/μ - r̂
    let h_vec = r_vec.cross(&v_vec);
    let e_vec = v_vec.cross(&h_vec) / mu - r_vec / r;
    let e = e_vec.magnitude();

    let h = h_vec.magnitude();
    let inc = if h > 0.0 {
        (h_vec.z / h).clamp(-1.0, 1.0).acos()
    } else {
        // Radial orbit: the plane is undefined
        0.0
    };

    Ok(Orbit { a, e, inc })
}
