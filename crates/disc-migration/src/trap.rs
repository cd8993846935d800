//! Planet trap at the inner edge of the disc.
//!
//! Inside a sharp inner edge the corotation torque dominates and the net
//! torque changes sign, so inward migration stalls at the edge. This is
//! modelled as a dimensionless factor on the semi-major axis rate:
//!
//! ```text
//!          ⎧  1                                          r ≥ r_e (1 + h)
//! f(r) =   ⎨  5.5 cos(π (r_e (1 + h) - r) / (2 h r_e)) - 4.5   inside the zone
//!          ⎩ -10                                         r ≤ r_e (1 - h)
//! ```
//!
//! The transition is continuous and monotonic: +1 at the outer boundary,
//! -4.5 at the edge itself, -10 at the inner boundary.
//!
//! # References
//! - Masset et al. (2006) - Disk surface density transitions as protoplanet traps
//! - Pichierri et al. (2018) - Forming chains of resonant planets through migration

use std::f64::consts::PI;

/// Migration reversal factor for a planet at `r` near an edge at `r_edge`
/// with fractional half-width `h`.
pub fn trap_factor(r: f64, h: f64, r_edge: f64) -> f64 {
    let outer = r_edge * (1.0 + h);
    let inner = r_edge * (1.0 - h);

    if r >= outer {
        1.0
    } else if r > inner {
        5.5 * (PI * (outer - r) / (2.0 * h * r_edge)).cos() - 4.5
    } else {
        -10.0
    }
}
