//! Power-law disc profiles.
//!
//! The disc is described by two power laws in orbital radius:
//!
//! ```text
//! h/r(r) = 0.02 × 3^(-β) × r^β
//! Σ(r)   = Σ₀ × r^(-α)
//! ```
//!
//! With β = 0 the aspect ratio is the constant reference value 0.02. Both
//! functions are pure; the disc does not evolve in time.
//!
//! # References
//! - Pichierri et al. (2018) - Power-law disc used for resonant chains

use crate::error::{MigrationError, Result};

/// Aspect ratio h/r at the reference radius r = 3 (and everywhere for β = 0).
pub const REFERENCE_ASPECT_RATIO: f64 = 0.02;

/// Disc aspect ratio (scale height over radius) at radius `r`.
///
/// # Errors
/// `Domain` if `r` is not a positive finite number.
pub fn aspect_ratio(r: f64, beta: f64) -> Result<f64> {
    check_radius(r)?;
    Ok(REFERENCE_ASPECT_RATIO * 3.0_f64.powf(-beta) * r.powf(beta))
}

/// Gas surface density at radius `r` for surface density `sigma0` at r = 1.
///
/// # Errors
/// `Domain` if `r` is not a positive finite number.
pub fn surface_density(r: f64, sigma0: f64, alpha: f64) -> Result<f64> {
    check_radius(r)?;
    Ok(sigma0 * r.powf(-alpha))
}

fn check_radius(r: f64) -> Result<()> {
    if r > 0.0 && r.is_finite() {
        Ok(())
    } else {
        Err(MigrationError::domain("radius", format!("r = {r}, must be positive")))
    }
}
