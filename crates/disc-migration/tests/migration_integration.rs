//! Integration tests for migration inside a full N-body integration.
//!
//! A star and one or two planets are integrated with direct gravity plus
//! Type I migration through the leapfrog integrator, and the orbital
//! elements are checked against the expected exponential evolution.

use nalgebra::Vector3;
use nbody::body::Body;
use nbody::forces::{CompositeForce, DirectGravity, ForceError};
use nbody::frames::Coordinates;
use nbody::integrator::{Integrator, Leapfrog};
use nbody::orbit::{Orbit, orbit_of};
use nbody::state::SystemState;

use disc_migration::{DiscParameters, MigrationConfig, TypeIMigration};

const G: f64 = 1.0;
const DT: f64 = 1e-3;

fn star() -> Body {
    Body::new(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0])
}

/// Planet at radius `r` on the x axis moving with `speed_factor` times the
/// circular speed, tilted by `inc` radians.
fn planet(mass: f64, r: f64, speed_factor: f64, inc: f64) -> Body {
    let v = speed_factor * (G * (1.0 + mass) / r).sqrt();
    Body::new(mass, [r, 0.0, 0.0], [0.0, v * inc.cos(), v * inc.sin()])
}

fn system_with(planets: Vec<Body>) -> SystemState {
    let mut system = SystemState::new(G);
    system.push(star());
    for p in planets {
        system.push(p);
    }
    system
}

fn forces(migration: TypeIMigration) -> CompositeForce {
    CompositeForce::new()
        .with_force(DirectGravity::new())
        .with_force(migration)
}

fn orbit(system: &SystemState, index: usize) -> Orbit {
    orbit_of(system.g, &system.bodies[index], &system.bodies[0]).unwrap()
}

fn run(system: &mut SystemState, force: &CompositeForce, duration: f64) -> Result<f64, ForceError> {
    let n_steps = (duration / DT).round() as usize;
    Leapfrog::new().integrate(system, DT, n_steps, force)
}

#[test]
fn prescribed_tau_a_decays_semi_major_axis() {
    let tau_a = 100.0;
    let mut system = system_with(vec![planet(1e-5, 1.0, 1.0, 0.0).with_param("tau_a", tau_a)]);
    let force = forces(TypeIMigration::new());

    run(&mut system, &force, 10.0).unwrap();

    // Tangential drag on a circular orbit: da/dt = -2a / τ_a
    let a = orbit(&system, 1).a;
    let expected = (-2.0 * 10.0 / tau_a).exp();
    println!("a = {a:.5}, expected {expected:.5}");

    assert!((a - expected).abs() / expected < 0.02);
}

#[test]
fn negative_tau_a_grows_semi_major_axis() {
    let mut system = system_with(vec![planet(1e-5, 1.0, 1.0, 0.0).with_param("tau_a", -200.0)]);
    let force = forces(TypeIMigration::new());

    run(&mut system, &force, 5.0).unwrap();

    assert!(orbit(&system, 1).a > 1.03);
}

#[test]
fn planet_inside_trap_migrates_outward() {
    let disc = DiscParameters {
        inner_disc_edge: 1.0,
        disc_edge_width: 0.1,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1.5e-8,
    };
    let migration = TypeIMigration::from_config(&MigrationConfig {
        coordinates: Coordinates::Jacobi,
        disc: Some(disc),
    });

    let mut system = system_with(vec![planet(1e-5, 0.85, 1.0, 0.0)]);
    let force = forces(migration);

    run(&mut system, &force, 1.0).unwrap();

    let elements = orbit(&system, 1);
    println!("a = {:.5}, e = {:.2e}", elements.a, elements.e);
    assert!(elements.a > 0.88);
}

#[test]
fn planet_outside_trap_migrates_inward() {
    let disc = DiscParameters {
        inner_disc_edge: 0.5,
        disc_edge_width: 0.05,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1.5e-8,
    };
    let migration = TypeIMigration::from_config(&MigrationConfig {
        coordinates: Coordinates::Jacobi,
        disc: Some(disc),
    });

    let mut system = system_with(vec![planet(1e-5, 1.0, 1.0, 0.0)]);
    let force = forces(migration);

    run(&mut system, &force, 2.0).unwrap();

    assert!(orbit(&system, 1).a < 1.0);
}

#[test]
fn prescribed_tau_e_damps_eccentricity() {
    let p = planet(1e-5, 1.0, 1.05, 0.0)
        .with_param("tau_a", f64::INFINITY)
        .with_param("tau_e", 50.0);
    let mut system = system_with(vec![p]);
    let force = forces(TypeIMigration::new());

    let e0 = orbit(&system, 1).e;
    run(&mut system, &force, 50.0).unwrap();
    let e = orbit(&system, 1).e;

    println!("e: {e0:.4} -> {e:.4}");
    assert!(e0 > 0.1);
    assert!(e < 0.5 * e0);
    assert!(e > 0.01);
}

#[test]
fn prescribed_tau_inc_damps_inclination() {
    let p = planet(1e-5, 1.0, 1.0, 0.1)
        .with_param("tau_a", f64::INFINITY)
        .with_param("tau_inc", 20.0);
    let mut system = system_with(vec![p]);
    let force = forces(TypeIMigration::new());

    let inc0 = orbit(&system, 1).inc;
    run(&mut system, &force, 20.0).unwrap();
    let inc = orbit(&system, 1).inc;

    println!("inc: {inc0:.4} -> {inc:.4}");
    assert!(inc < 0.6 * inc0);
}

#[test]
fn back_reaction_conserves_total_momentum() {
    let disc = DiscParameters {
        inner_disc_edge: 0.5,
        disc_edge_width: 0.05,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1.5e-8,
    };

    for coordinates in [Coordinates::Jacobi, Coordinates::Barycentric] {
        let migration = TypeIMigration::from_config(&MigrationConfig {
            coordinates,
            disc: Some(disc),
        });
        let planets = vec![planet(1e-5, 1.0, 1.0, 0.0), planet(3e-5, 1.6, 1.0, 0.0)];
        let mut system = system_with(planets);
        let force = forces(migration);

        let p0 = system.total_momentum();
        run(&mut system, &force, 2.0).unwrap();
        let drift: Vector3<f64> = system.total_momentum() - p0;

        println!("{coordinates:?}: momentum drift {:.2e}", drift.magnitude());
        assert!(drift.magnitude() < 1e-12);
    }
}

#[test]
fn massless_planet_on_disc_path_aborts_the_step() {
    let disc = DiscParameters {
        inner_disc_edge: 0.5,
        disc_edge_width: 0.05,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1.5e-8,
    };
    let migration = TypeIMigration::from_config(&MigrationConfig {
        coordinates: Coordinates::Jacobi,
        disc: Some(disc),
    });
    let mut system = system_with(vec![planet(0.0, 1.0, 1.0, 0.0)]);
    let force = forces(migration);

    let err = run(&mut system, &force, 0.01).unwrap_err();

    assert!(matches!(err, ForceError::Body { .. }));
    assert!(err.to_string().contains("planet mass"));
}
