//! Reference-frame reduction for forces defined relative to a reference body.
//!
//! Many perturbations (migration, damping, drag) are written for a single
//! body orbiting a single reference. In a multi-body system the reference
//! has to be chosen, and momentum conservation requires the equal and
//! opposite reaction to be handed back to whatever the reference was made of.
//!
//! # Coordinate choices
//!
//! | Frame         | Reference for body i                         | Reaction shared by     |
//! |---------------|----------------------------------------------|------------------------|
//! | `Jacobi`      | center of mass of bodies 0..i                | bodies 0..i            |
//! | `Barycentric` | center of mass of the whole system           | every body             |
//! | `Particle`    | center of mass of the flagged reference bodies | the reference bodies |
//!
//! Body 0 is the central body and is never perturbed itself.

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::forces::ForceError;
use crate::state::SystemState;

/// Coordinate frame in which per-body orbits are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Coordinates {
    #[default]
    Jacobi,
    Barycentric,
    Particle,
}

/// Applies a per-body kernel in the chosen frame and distributes reactions.
///
/// `per_body(body, reference)` returns the acceleration on `body` due to its
/// interaction with `reference`. The result is added to
/// `accelerations[i]`, and the reaction `-mᵢ aᵢ` is spread as a uniform
/// acceleration over the bodies that make up the reference.
///
/// With `back_reactions_inclusive` in the barycentric frame, body i shares in
/// its own reaction (the barycenter includes it); otherwise the reaction is
/// spread over all other bodies.
///
/// In the `Particle` frame, reference bodies are those with a parameter
/// named `reference_name` set to a non-zero integer.
///
/// # Errors
///
/// The first kernel error is returned unchanged; accelerations accumulated
/// before the failure are left in place. A `Particle` frame without any
/// reference body yields [`ForceError::MissingReference`].
pub fn com_force<F>(
    state: &SystemState,
    coordinates: Coordinates,
    back_reactions_inclusive: bool,
    reference_name: &str,
    force_name: &'static str,
    accelerations: &mut [Vector3<f64>],
    mut per_body: F,
) -> Result<(), ForceError>
where
    F: FnMut(&Body, &Body) -> Result<Vector3<f64>, ForceError>,
{
    let bodies = &state.bodies;
    debug_assert_eq!(accelerations.len(), bodies.len());
    debug!(
        "{force_name}: reducing {} bodies in {coordinates:?} coordinates",
        bodies.len()
    );

    match coordinates {
        Coordinates::Jacobi => {
            let Some(first) = bodies.first() else {
                return Ok(());
            };
            let mut interior = Body::center_of_mass([first]);

            for (i, body) in bodies.iter().enumerate().skip(1) {
                let accel = per_body(body, &interior)?;
                accelerations[i] += accel;

                if body.mass != 0.0 && interior.mass > 0.0 {
                    let reaction = -accel * (body.mass / interior.mass);
                    accelerations[..i].iter_mut().for_each(|a| *a += reaction);
                }

                interior = interior.merged_with(body);
            }
        }
        Coordinates::Barycentric => {
            let barycenter = state.center_of_mass();

            for (i, body) in bodies.iter().enumerate().skip(1) {
                let accel = per_body(body, &barycenter)?;
                accelerations[i] += accel;

                let sharing_mass = if back_reactions_inclusive {
                    barycenter.mass
                } else {
                    barycenter.mass - body.mass
                };
                if body.mass == 0.0 || sharing_mass <= 0.0 {
                    continue;
                }

                let reaction = -accel * (body.mass / sharing_mass);
                accelerations
                    .iter_mut()
                    .enumerate()
                    .filter(|(j, _)| back_reactions_inclusive || *j != i)
                    .for_each(|(_, a)| *a += reaction);
            }
        }
        Coordinates::Particle => {
            let is_reference: Vec<bool> = bodies
                .iter()
                .map(|b| is_flagged(b, reference_name, force_name))
                .collect::<Result<_, _>>()?;

            if !is_reference.iter().any(|&r| r) {
                return Err(ForceError::MissingReference {
                    force: force_name,
                    name: reference_name.to_string(),
                });
            }

            let reference = Body::center_of_mass(
                bodies
                    .iter()
                    .zip(&is_reference)
                    .filter(|(_, r)| **r)
                    .map(|(b, _)| b),
            );

            for (i, body) in bodies.iter().enumerate().skip(1) {
                if is_reference[i] {
                    continue;
                }

                let accel = per_body(body, &reference)?;
                accelerations[i] += accel;

                if body.mass != 0.0 && reference.mass > 0.0 {
                    let reaction = -accel * (body.mass / reference.mass);
                    accelerations
                        .iter_mut()
                        .zip(&is_reference)
                        .filter(|(_, r)| **r)
                        .for_each(|(a, _)| *a += reaction);
                }
            }
        }
    }

    Ok(())
}

fn is_flagged(body: &Body, name: &str, force_name: &'static str) -> Result<bool, ForceError> {
    let flag = body
        .params
        .get_integer(name)
        .map_err(|source| ForceError::Config {
            force: force_name,
            source: Box::new(source),
        })?;
    Ok(flag.is_some_and(|v| v != 0))
}
