use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
/// G = 4π² ≈ 39.478417
pub const G_AU_YEAR: f64 = 39.478417;

/// Complete state of an N-body system at a given time
///
/// Body 0 is the central body (the star hosting the disc); the remaining
/// bodies orbit it. The gravitational constant is part of the state and is
/// passed explicitly to every force model.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Current simulation time in code units
    pub time: f64,
    /// Gravitational constant in code units
    pub g: f64,
    /// All bodies, central body first
    pub bodies: Vec<Body>,
    /// Next available body ID
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system with gravitational constant `g`
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new(1.0);
    ///
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new(g: f64) -> Self {
        Self {
            time: 0.0,
            g,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates an empty system in AU, solar masses and years
    pub fn au_years() -> Self {
        Self::new(G_AU_YEAR)
    }

    /// Adds a new body without parameters and returns its ID
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let mut system = SystemState::new(1.0);
    /// system.add_body(1.0, Point3::origin(), Vector3::zeros());
    /// let planet = system.add_body(1e-5, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    ///
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(planet.0, 1);
    /// ```
    pub fn add_body(&mut self, mass: f64, position: Point3<f64>, velocity: Vector3<f64>) -> BodyId {
        let mut body = Body::new(mass, [0.0; 3], [0.0; 3]);
        body.position = position;
        body.velocity = velocity;
        self.push(body)
    }

    /// Adds a fully built body (including its parameters), assigning it a fresh ID
    pub fn push(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the total mass of all bodies (including the central body)
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Barycenter of the whole system as a pseudo-body
    pub fn center_of_mass(&self) -> Body {
        Body::center_of_mass(&self.bodies)
    }

    /// Returns the total momentum of all bodies
    ///
    /// Conserved by every force that distributes its back-reaction
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .fold(Vector3::zeros(), |acc, l| acc + l)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
