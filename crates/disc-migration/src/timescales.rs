//! Type I migration and damping timescales.
//!
//! Low-mass planets embedded in a gaseous disc launch spiral density waves.
//! The resulting torques change the planet's semi-major axis, eccentricity
//! and inclination on timescales set by the local wave timescale.
//!
//! # Physical Model
//!
//! ```text
//! t_wave = (M_*/M_p) × (M_* / (Σ(r) a²)) × (h/r)⁴ × Ω(a)⁻¹
//! t_e    = (t_wave / 0.780) × (1 - 0.14 (e/h)² + 0.06 (e/h)³)
//! t_a    = (2 t_wave / (2.7 + 1.1 α)) × (h/r)² × P(e)
//! P(e)   = (1 + (e / 2.25h)^1.2 + (e / 2.84h)^6) / (1 - (e / 2.02h)^4)
//! ```
//!
//! Ω(a) = √(G M_* / a³) is evaluated at the semi-major axis, while the
//! surface density and aspect ratio are evaluated at the instantaneous
//! radius. P(e) reverses the torque for eccentric orbits and diverges at
//! e = 2.02 h; the approximation is not valid there and evaluation fails.
//!
//! # References
//! - Tanaka, Takeuchi & Ward (2002) - Three-dimensional interaction between a
//!   planet and an isothermal gaseous disk
//! - Tanaka & Ward (2004) - Three-dimensional interaction between a planet and
//!   an isothermal gaseous disk. II.
//! - Papaloizou & Larwood (2000) - On the orbital evolution and growth of
//!   protoplanets embedded in a gaseous disc

use crate::disc::surface_density;
use crate::error::{MigrationError, Result};

/// Local wave timescale (Tanaka & Ward 2004).
///
/// # Arguments
/// * `g` - Gravitational constant in code units
/// * `m_planet` - Planet mass
/// * `m_star` - Mass of the reference body
/// * `a` - Semi-major axis of the planet
/// * `r` - Instantaneous orbital radius (where Σ is evaluated)
/// * `sigma0` - Surface density at unit radius
/// * `alpha` - Surface density power-law index
/// * `hr` - Disc aspect ratio at `r`
///
/// # Errors
/// `Domain` for non-positive planet mass, stellar mass, semi-major axis,
/// surface density, aspect ratio or gravitational constant.
#[allow(clippy::too_many_arguments)]
pub fn wave_timescale(
    g: f64,
    m_planet: f64,
    m_star: f64,
    a: f64,
    r: f64,
    sigma0: f64,
    alpha: f64,
    hr: f64,
) -> Result<f64> {
    require_positive("planet mass", m_planet)?;
    require_positive("stellar mass", m_star)?;
    require_positive("semi-major axis", a)?;
    require_positive("gravitational constant", g)?;
    require_positive("aspect ratio", hr)?;

    let sigma = surface_density(r, sigma0, alpha)?;
    require_positive("surface density", sigma)?;

    let omega = (g * m_star / a.powi(3)).sqrt();

    Ok((m_star / m_planet) * (m_star / (sigma * a * a)) * hr.powi(4) / omega)
}

/// Eccentricity damping timescale t_e.
///
/// # Errors
/// `Domain` if the eccentricity is negative, `hr` is not positive, or the
/// polynomial correction is not positive (the timescale would change sign).
pub fn eccentricity_damping_timescale(t_wave: f64, e: f64, hr: f64) -> Result<f64> {
    let x = scaled_eccentricity(e, hr)?;
    let correction = 1.0 - 0.14 * x.powi(2) + 0.06 * x.powi(3);

    if correction <= 0.0 || !correction.is_finite() {
        return Err(MigrationError::domain(
            "eccentricity damping timescale",
            format!("correction factor {correction} at e/h = {x} is not positive"),
        ));
    }

    Ok(t_wave / 0.780 * correction)
}

/// Torque reversal factor P(e).
///
/// Equal to 1 for circular orbits and grows with eccentricity.
///
/// # Errors
/// `Domain` for `e ≥ 2.02 hr`, where the denominator vanishes.
pub fn torque_reversal_factor(e: f64, hr: f64) -> Result<f64> {
    let _ = scaled_eccentricity(e, hr)?;

    let singular = e / (2.02 * hr);
    if singular >= 1.0 {
        return Err(MigrationError::domain(
            "torque reversal factor",
            format!("e = {e} is at or beyond the singularity e = 2.02 h = {}", 2.02 * hr),
        ));
    }

    let numerator = 1.0 + (e / (2.25 * hr)).powf(1.2) + (e / (2.84 * hr)).powi(6);
    let denominator = 1.0 - singular.powi(4);

    Ok(numerator / denominator)
}

/// Semi-major axis damping timescale t_a.
pub fn semi_major_axis_damping_timescale(t_wave: f64, alpha: f64, hr: f64, pe: f64) -> f64 {
    2.0 * t_wave / (2.7 + 1.1 * alpha) * hr.powi(2) * pe
}

fn scaled_eccentricity(e: f64, hr: f64) -> Result<f64> {
    require_positive("aspect ratio", hr)?;
    if !(e >= 0.0 && e.is_finite()) {
        return Err(MigrationError::domain(
            "eccentricity",
            format!("e = {e}, must be non-negative"),
        ));
    }
    Ok(e / hr)
}

fn require_positive(quantity: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MigrationError::domain(quantity, format!("{value}, must be positive")))
    }
}
