use nalgebra::{Point3, Vector3};

use crate::params::{ParamValue, Params};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Id carried by synthesized center-of-mass pseudo-bodies.
    pub const CENTER_OF_MASS: BodyId = BodyId(u32::MAX);
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == BodyId::CENTER_OF_MASS {
            write!(f, "center-of-mass")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,              // code mass units
    pub position: Point3<f64>,  // code length units
    pub velocity: Vector3<f64>, // code length / code time
    pub params: Params,
}

impl Body {
    /// Creates a body with no parameters and id 0.
    ///
    /// `SystemState::push` assigns a fresh id when the body joins a system.
    pub fn new(mass: f64, position: [f64; 3], velocity: [f64; 3]) -> Self {
        Body {
            id: BodyId(0),
            mass,
            position: Point3::new(position[0], position[1], position[2]),
            velocity: Vector3::new(velocity[0], velocity[1], velocity[2]),
            params: Params::new(),
        }
    }

    /// Builder-style parameter assignment.
    ///
    /// ```
    /// use nbody::body::Body;
    ///
    /// let planet = Body::new(1e-5, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    ///     .with_param("tau_a", 1.0e4);
    /// assert!(planet.params.contains("tau_a"));
    /// ```
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.set(key, value);
        self
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum per unit mass (r × v) about the origin
    pub fn specific_angular_momentum(&self) -> Vector3<f64> {
        self.position.coords.cross(&self.velocity)
    }

    /// Pairwise center of mass of `self` and `other`.
    ///
    /// Two massless bodies merge to their geometric midpoint so the result
    /// never carries NaN coordinates.
    pub fn merged_with(&self, other: &Body) -> Body {
        let mass = self.mass + other.mass;
        let (w_self, w_other) = if mass > 0.0 {
            (self.mass / mass, other.mass / mass)
        } else {
            (0.5, 0.5)
        };

        Body {
            id: BodyId::CENTER_OF_MASS,
            mass,
            position: Point3::from(self.position.coords * w_self + other.position.coords * w_other),
            velocity: self.velocity * w_self + other.velocity * w_other,
            params: Params::new(),
        }
    }

    /// Mass-weighted center of mass of a set of bodies.
    ///
    /// An empty set yields a massless pseudo-body at rest at the origin.
    pub fn center_of_mass<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Body {
        let mut iter = bodies.into_iter();
        let Some(first) = iter.next() else {
            let mut origin = Body::new(0.0, [0.0; 3], [0.0; 3]);
            origin.id = BodyId::CENTER_OF_MASS;
            return origin;
        };

        let mut com = iter.fold(first.clone(), |com, b| com.merged_with(b));
        com.id = BodyId::CENTER_OF_MASS;
        com.params = Params::new();
        com
    }
}
