//! Time integration for N-body systems
//!
//! The primary integrator is the symplectic leapfrog method, which conserves
//! energy and angular momentum over long timescales for conservative forces.
//! Dissipative perturbations (migration, damping) are velocity dependent;
//! they are evaluated with the velocities present at each kick.

use nalgebra::Vector3;

use crate::forces::{ForceError, ForceModel};
use crate::state::SystemState;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Errors
    ///
    /// Propagates the first force failure. The state may have been partially
    /// advanced (e.g. after the first kick) when this happens.
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), ForceError>;

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<f64, ForceError> {
        for _ in 0..n_steps {
            self.step(state, dt, force)?;
        }
        Ok(state.time)
    }
}

/// Symplectic leapfrog integrator (2nd order)
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) * dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) * dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) * dt/2
///
/// # Examples
///
/// ```
/// use nbody::integrator::{Integrator, Leapfrog};
/// use nbody::forces::DirectGravity;
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::au_years();
/// system.add_body(1.0, Point3::origin(), Vector3::zeros());
/// system.add_body(3.0e-6, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 6.28, 0.0));
///
/// let integrator = Leapfrog::new();
/// integrator.step(&mut system, 0.01, &DirectGravity::new()).unwrap();
/// assert!(system.time > 0.0);
/// ```
pub struct Leapfrog {
    /// Whether to use the drift-kick-drift (DKD) variant
    ///
    /// If false, uses KDK form (kick-drift-kick).
    pub use_dkd: bool,
}

impl Leapfrog {
    /// Creates a new leapfrog integrator using the kick-drift-kick form
    pub fn new() -> Self {
        Self { use_dkd: false }
    }

    /// Creates a leapfrog integrator using drift-kick-drift form
    pub fn new_dkd() -> Self {
        Self { use_dkd: true }
    }

    fn kick(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), ForceError> {
        let mut accelerations = vec![Vector3::zeros(); state.bodies.len()];
        force.accumulate(state, &mut accelerations)?;

        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt;
            });
        Ok(())
    }

    fn drift(&self, state: &mut SystemState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });
    }
}

impl Default for Leapfrog {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for Leapfrog {
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), ForceError> {
        if self.use_dkd {
            self.drift(state, dt / 2.0);
            self.kick(state, dt, force)?;
            self.drift(state, dt / 2.0);
        } else {
            self.kick(state, dt / 2.0, force)?;
            self.drift(state, dt);
            self.kick(state, dt / 2.0, force)?;
        }

        state.time += dt;
        Ok(())
    }
}
