//! Per-particle evaluation of the Type I migration acceleration.
//!
//! For one particle and its reference body the evaluator resolves three
//! timescales, each on its own:
//!
//! | Quantity        | Particle override | Disc model           | Neither |
//! |-----------------|-------------------|----------------------|---------|
//! | 1/τ_a           | `1 / tau_a`       | f_trap(a) / t_a      | 0       |
//! | τ_e             | `tau_e`           | t_e                  | ∞       |
//! | τ_inc           | `tau_inc`         | (none)               | ∞       |
//!
//! An override always wins, even when the disc is configured, and the disc
//! and orbit are only looked at when some quantity actually needs them.
//!
//! # Acceleration
//!
//! With Δr and Δv the position and velocity relative to the reference body:
//!
//! ```text
//! a  = -Δv / τ_a
//!      - 2 (Δv·Δr) / (|Δr|² τ_e) Δr     (if τ_e or τ_inc is finite)
//! a_z += -2 Δv_z / τ_inc
//! ```
//!
//! Positive timescales damp, negative timescales drive growth. The
//! eccentricity term acts along Δr and removes the radial velocity, so it
//! damps e at constant angular momentum (Papaloizou & Larwood 2000).

use log::trace;
use nalgebra::Vector3;
use nbody::body::Body;
use nbody::orbit::{Orbit, orbit_of};
use nbody::params::Params;

use crate::config::{DiscParameters, TAU_A, TAU_E, TAU_INC};
use crate::disc::aspect_ratio;
use crate::error::{MigrationError, Result};
use crate::timescales::{
    eccentricity_damping_timescale, semi_major_axis_damping_timescale, torque_reversal_factor,
    wave_timescale,
};
use crate::trap::trap_factor;

/// Timescales prescribed directly on a particle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticleOverrides {
    pub tau_a: Option<f64>,
    pub tau_e: Option<f64>,
    pub tau_inc: Option<f64>,
}

impl ParticleOverrides {
    /// Reads `tau_a`, `tau_e` and `tau_inc` from a particle's parameters.
    ///
    /// Infinite values are accepted and switch the term off. NaN or zero is
    /// a configuration error.
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(ParticleOverrides {
            tau_a: timescale(params, TAU_A)?,
            tau_e: timescale(params, TAU_E)?,
            tau_inc: timescale(params, TAU_INC)?,
        })
    }

    /// Whether any quantity falls back to the disc model.
    pub fn needs_disc(&self) -> bool {
        self.tau_a.is_none() || self.tau_e.is_none()
    }
}

fn timescale(params: &Params, key: &str) -> Result<Option<f64>> {
    match params.get_float(key)? {
        Some(t) if t.is_nan() || t == 0.0 => Err(MigrationError::configuration(
            key,
            format!("{t} is not a usable timescale"),
        )),
        value => Ok(value),
    }
}

/// Disc conditions seen by one particle at its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDisc {
    /// Semi-major axis
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// Aspect ratio at the instantaneous radius
    pub hr: f64,
    /// Surface density power-law index
    pub alpha: f64,
    /// Wave timescale
    pub t_wave: f64,
    /// Planet trap factor at the semi-major axis
    pub trap: f64,
}

impl LocalDisc {
    /// Evaluates the disc for a planet of mass `m_planet` at radius `r` on
    /// `orbit` about a reference of mass `m_star`.
    ///
    /// # Errors
    /// `Domain` for a non-positive radius, mass or semi-major axis.
    pub fn at(
        g: f64,
        m_planet: f64,
        m_star: f64,
        r: f64,
        orbit: &Orbit,
        disc: &DiscParameters,
    ) -> Result<Self> {
        let hr = aspect_ratio(r, disc.beta)?;
        let t_wave = wave_timescale(
            g,
            m_planet,
            m_star,
            orbit.a,
            r,
            disc.initial_disc_surface_density,
            disc.alpha,
            hr,
        )?;

        Ok(LocalDisc {
            a: orbit.a,
            e: orbit.e,
            hr,
            alpha: disc.alpha,
            t_wave,
            trap: trap_factor(orbit.a, disc.disc_edge_width, disc.inner_disc_edge),
        })
    }

    /// Inverse semi-major axis timescale f_trap(a) / t_a.
    pub fn semi_major_axis_rate(&self) -> Result<f64> {
        let pe = torque_reversal_factor(self.e, self.hr)?;
        let t_a = semi_major_axis_damping_timescale(self.t_wave, self.alpha, self.hr, pe);
        Ok(self.trap / t_a)
    }

    /// Eccentricity damping timescale t_e.
    pub fn eccentricity_timescale(&self) -> Result<f64> {
        eccentricity_damping_timescale(self.t_wave, self.e, self.hr)
    }
}

/// The three resolved rates that drive the acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MigrationRates {
    /// Inverse semi-major axis timescale (0 switches the term off)
    pub invtau_a: f64,
    /// Eccentricity timescale (∞ switches the term off)
    pub tau_e: f64,
    /// Inclination timescale (∞ switches the term off)
    pub tau_inc: f64,
}

impl MigrationRates {
    pub const NONE: MigrationRates = MigrationRates {
        invtau_a: 0.0,
        tau_e: f64::INFINITY,
        tau_inc: f64::INFINITY,
    };
}

/// Resolves each rate from the override, else the disc, else nothing.
pub fn migration_rates(
    overrides: &ParticleOverrides,
    local: Option<&LocalDisc>,
) -> Result<MigrationRates> {
    let invtau_a = match (overrides.tau_a, local) {
        (Some(tau_a), _) => 1.0 / tau_a,
        (None, Some(disc)) => disc.semi_major_axis_rate()?,
        (None, None) => 0.0,
    };

    let tau_e = match (overrides.tau_e, local) {
        (Some(tau_e), _) => tau_e,
        (None, Some(disc)) => disc.eccentricity_timescale()?,
        (None, None) => f64::INFINITY,
    };

    Ok(MigrationRates {
        invtau_a,
        tau_e,
        tau_inc: overrides.tau_inc.unwrap_or(f64::INFINITY),
    })
}

/// Turns resolved rates into an acceleration for relative position `dr`
/// and relative velocity `dv`.
///
/// # Errors
/// `Domain` when the eccentricity or inclination term is active and the
/// particle sits on its reference body.
pub fn assemble_acceleration(
    dr: &Vector3<f64>,
    dv: &Vector3<f64>,
    rates: &MigrationRates,
) -> Result<Vector3<f64>> {
    let mut accel = -dv * rates.invtau_a;

    if rates.tau_e.is_finite() || rates.tau_inc.is_finite() {
        let r2 = dr.magnitude_squared();
        if r2 == 0.0 {
            return Err(MigrationError::domain(
                "radius",
                "particle coincides with its reference body",
            ));
        }

        let prefac = -2.0 * dv.dot(dr) / (r2 * rates.tau_e);
        accel += dr * prefac;
        accel.z -= 2.0 * dv.z / rates.tau_inc;
    }

    Ok(accel)
}

/// Migration acceleration of `particle` relative to `source`.
///
/// `g` is the simulation's gravitational constant and `force_params` the
/// migration force's parameter store. The mass of `source` plays the role
/// of the stellar mass.
///
/// # Examples
///
/// ```
/// use disc_migration::evaluator::particle_acceleration;
/// use nbody::body::Body;
/// use nbody::params::Params;
///
/// let star = Body::new(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
/// let planet = Body::new(1e-5, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]).with_param("tau_a", 1.0e4);
///
/// let accel = particle_acceleration(1.0, &planet, &star, &Params::new()).unwrap();
/// assert!((accel.y + 1.0e-4).abs() < 1e-18);
/// ```
pub fn particle_acceleration(
    g: f64,
    particle: &Body,
    source: &Body,
    force_params: &Params,
) -> Result<Vector3<f64>> {
    if particle.mass.is_nan() || particle.mass <= 0.0 {
        return Err(MigrationError::domain(
            "planet mass",
            format!("{}, must be positive", particle.mass),
        ));
    }

    let overrides = ParticleOverrides::from_params(&particle.params)?;
    let dr = particle.position - source.position;
    let dv = particle.velocity - source.velocity;

    let local = if overrides.needs_disc() {
        match DiscParameters::from_params(force_params)? {
            Some(disc) => {
                let orbit = orbit_of(g, particle, source)?;
                let r = dr.magnitude();
                Some(LocalDisc::at(g, particle.mass, source.mass, r, &orbit, &disc)?)
            }
            None => None,
        }
    } else {
        None
    };

    let rates = migration_rates(&overrides, local.as_ref())?;
    trace!(
        "body {}: 1/tau_a = {:e}, tau_e = {:e}, tau_inc = {:e}",
        particle.id, rates.invtau_a, rates.tau_e, rates.tau_inc
    );

    assemble_acceleration(&dr, &dv, &rates)
}
