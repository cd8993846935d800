//! Direct N-body gravity (O(N²) implementation)

use nalgebra::Vector3;

use crate::forces::{ForceError, ForceModel};
use crate::state::SystemState;

/// Direct O(N²) gravitational force computation
///
/// Computes gravitational acceleration by summing forces between all pairs
/// of bodies, the central body included. Uses the gravitational constant
/// stored in the system state.
///
/// # Examples
///
/// ```
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body(1.0, Point3::origin(), Vector3::zeros());
/// system.add_body(0.001, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
///
/// let accel = DirectGravity::new().accelerations(&system).unwrap();
///
/// // Planet is pulled toward the star (negative x direction)
/// assert!(accel[1].x < 0.0);
/// ```
pub struct DirectGravity {
    /// Optional softening length to prevent singularities
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a new direct gravity force with no softening
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    /// Creates a new direct gravity force with specified softening length
    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(
        &self,
        state: &SystemState,
        accelerations: &mut [Vector3<f64>],
    ) -> Result<(), ForceError> {
        let eps2 = self.softening * self.softening;
        let g = state.g;

        for (i, body) in state.bodies.iter().enumerate() {
            let accel = state
                .bodies
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| {
                    let dr = other.position - body.position;
                    let r2 = dr.magnitude_squared() + eps2;
                    let r = r2.sqrt();
                    dr * (g * other.mass / (r2 * r))
                })
                .fold(Vector3::zeros(), |acc, a| acc + a);

            accelerations[i] += accel;
        }

        Ok(())
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let eps2 = self.softening * self.softening;

        // Each pair counted once
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let r = ((a.position - b.position).magnitude_squared() + eps2).sqrt();
                    -state.g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
