//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and various implementations
//! for computing gravitational and other forces on bodies.

use std::error::Error as StdError;

use nalgebra::Vector3;
use thiserror::Error;

use crate::body::BodyId;
use crate::state::SystemState;

pub mod gravity;


pub use gravity::DirectGravity;

/// Failure of a force model during one evaluation.
///
/// Forces report failures instead of substituting a fallback acceleration;
/// the caller decides whether to skip the step, halt, or reconfigure.
#[derive(Debug, Error)]
pub enum ForceError {
    /// The force could not be evaluated for one body.
    #[error("force `{force}` failed on body {body}: {source}")]
    Body {
        force: &'static str,
        body: BodyId,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The force's own configuration could not be read.
    #[error("force `{force}` is misconfigured: {source}")]
    Config {
        force: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A particle-relative frame was requested but no body carries the reference flag.
    #[error("force `{force}` uses particle coordinates but no body has `{name}` set")]
    MissingReference { force: &'static str, name: String },
}

impl ForceError {
    pub fn body<E: StdError + Send + Sync + 'static>(
        force: &'static str,
        body: BodyId,
        err: E,
    ) -> Self {
        Self::Body {
            force,
            body,
            source: Box::new(err),
        }
    }

    pub fn config<E: StdError + Send + Sync + 'static>(force: &'static str, err: E) -> Self {
        Self::Config {
            force,
            source: Box::new(err),
        }
    }
}

/// A source of acceleration on bodies in an N-body system
///
/// Force models add their contribution to a shared acceleration buffer (one
/// entry per body, same order as `state.bodies`). Forces with reactions (e.g.
/// a perturbation measured relative to a reference body) write to several
/// entries at once, which is why the whole buffer is passed in.
///
/// # Examples
///
/// ```
/// use nbody::forces::{ForceModel, DirectGravity};
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body(1.0, Point3::origin(), Vector3::zeros());
/// system.add_body(0.001, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
///
/// let mut accelerations = vec![Vector3::zeros(); system.body_count()];
/// DirectGravity::new().accumulate(&system, &mut accelerations).unwrap();
///
/// assert!(accelerations[1].x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Add this force's accelerations to `accelerations`
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state
    /// * `accelerations` - One entry per body in `state.bodies`
    fn accumulate(
        &self,
        state: &SystemState,
        accelerations: &mut [Vector3<f64>],
    ) -> Result<(), ForceError>;

    /// Compute potential energy contribution (optional)
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that contribute to potential energy (e.g., gravity).
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }

    /// Convenience wrapper returning a fresh acceleration buffer
    fn accelerations(&self, state: &SystemState) -> Result<Vec<Vector3<f64>>, ForceError> {
        let mut accelerations = vec![Vector3::zeros(); state.bodies.len()];
        self.accumulate(state, &mut accelerations)?;
        Ok(accelerations)
    }
}

/// Combine multiple force models into a single composite force
///
/// # Examples
///
/// ```
/// use nbody::forces::{CompositeForce, DirectGravity};
///
/// let composite = CompositeForce::new()
///     .with_force(DirectGravity::new());
/// ```
pub struct CompositeForce {
    models: Vec<Box<dyn ForceModel>>,
}

impl CompositeForce {
    /// Creates an empty composite force
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Adds a force model to the composite
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.models.push(Box::new(force));
        self
    }
}

impl Default for CompositeForce {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for CompositeForce {
    fn accumulate(
        &self,
        state: &SystemState,
        accelerations: &mut [Vector3<f64>],
    ) -> Result<(), ForceError> {
        self.models
            .iter()
            .try_for_each(|f| f.accumulate(state, accelerations))
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        self.models.iter().map(|f| f.potential_energy(state)).sum()
    }
}
