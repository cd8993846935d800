use approx::assert_relative_eq;
use nalgebra::Vector3;
use nbody::body::Body;
use nbody::frames::Coordinates;
use nbody::orbit::{Orbit, OrbitError};
use nbody::params::Params;

use crate::config::DiscParameters;
use crate::error::MigrationError;
use crate::evaluator::{
    LocalDisc, MigrationRates, ParticleOverrides, assemble_acceleration, migration_rates,
    particle_acceleration,
};

fn trap_disc() -> DiscParameters {
    DiscParameters {
        inner_disc_edge: 1.0,
        disc_edge_width: 0.05,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1e-3,
    }
}

fn disc_params() -> Params {
    let mut params = Params::new();
    trap_disc().write_params(&mut params);
    params
}

fn circular_orbit() -> Orbit {
    Orbit { a: 1.0, e: 0.0, inc: 0.0 }
}

fn star() -> Body {
    Body::new(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0])
}

fn planet(mass: f64) -> Body {
    Body::new(mass, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

#[test]
fn test_local_disc_reference_scenario() {
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 1.0, &circular_orbit(), &trap_disc()).unwrap();

    assert_eq!(local.hr, 0.02);
    assert_relative_eq!(local.t_wave, 16.0, max_relative = 1e-12);
    assert_relative_eq!(local.trap, -4.5, epsilon = 1e-12);

    // t_a = 2 × 16 / 3.8 × 0.02² × P(0) with P(0) = 1
    let t_a = 2.0 * 16.0 / 3.8 * 4e-4;
    let rate = local.semi_major_axis_rate().unwrap();
    assert!(rate < 0.0);
    assert_relative_eq!(rate, -4.5 / t_a, max_relative = 1e-9);
    assert_relative_eq!(rate, -1335.9375, max_relative = 1e-9);
}

#[test]
fn test_local_disc_outside_trap_migrates_inward() {
    let orbit = Orbit { a: 2.0, e: 0.0, inc: 0.0 };
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 2.0, &orbit, &trap_disc()).unwrap();

    assert_eq!(local.trap, 1.0);
    assert!(local.semi_major_axis_rate().unwrap() > 0.0);
}

#[test]
fn test_local_disc_eccentricity_timescale() {
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 1.0, &circular_orbit(), &trap_disc()).unwrap();
    let t_e = local.eccentricity_timescale().unwrap();
    assert_relative_eq!(t_e, 16.0 / 0.780, max_relative = 1e-12);
}

#[test]
fn test_local_disc_rejects_eccentricity_at_singularity() {
    let orbit = Orbit { a: 1.0, e: 0.05, inc: 0.0 };
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 1.0, &orbit, &trap_disc()).unwrap();

    let err = local.semi_major_axis_rate().unwrap_err();
    assert!(matches!(err, MigrationError::Domain { .. }));
}

#[test]
fn test_override_takes_precedence_over_disc() {
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 1.0, &circular_orbit(), &trap_disc()).unwrap();
    let overrides = ParticleOverrides {
        tau_a: Some(-2.0e3),
        tau_e: Some(50.0),
        tau_inc: None,
    };

    let with_disc = migration_rates(&overrides, Some(&local)).unwrap();
    let without_disc = migration_rates(&overrides, None).unwrap();

    assert_eq!(with_disc.invtau_a, -1.0 / 2.0e3);
    assert_eq!(with_disc.tau_e, 50.0);
    assert_eq!(with_disc, without_disc);
}

#[test]
fn test_rates_without_override_or_disc_are_inert() {
    let rates = migration_rates(&ParticleOverrides::default(), None).unwrap();
    assert_eq!(rates, MigrationRates::NONE);
}

#[test]
fn test_inclination_is_override_only() {
    let local = LocalDisc::at(1.0, 1e-5, 1.0, 1.0, &circular_orbit(), &trap_disc()).unwrap();
    let rates = migration_rates(&ParticleOverrides::default(), Some(&local)).unwrap();

    assert!(rates.tau_e.is_finite());
    assert_eq!(rates.tau_inc, f64::INFINITY);
}

#[test]
fn test_infinite_timescales_give_no_damping_term() {
    let dr = Vector3::new(0.3, -1.2, 0.4);
    let dv = Vector3::new(0.7, 0.1, -0.25);

    let accel = assemble_acceleration(&dr, &dv, &MigrationRates::NONE).unwrap();
    assert_eq!(accel, Vector3::zeros());

    let drag_only = MigrationRates {
        invtau_a: 1e-3,
        ..MigrationRates::NONE
    };
    let accel = assemble_acceleration(&dr, &dv, &drag_only).unwrap();
    assert_eq!(accel, -dv * 1e-3);
}

#[test]
fn test_positive_tau_e_removes_radial_velocity() {
    let dr = Vector3::new(1.0, 0.0, 0.0);
    let dv = Vector3::new(0.1, 1.0, 0.0);
    let rates = MigrationRates {
        tau_e: 10.0,
        ..MigrationRates::NONE
    };

    let accel = assemble_acceleration(&dr, &dv, &rates).unwrap();

    assert_relative_eq!(accel.x, -0.02, epsilon = 1e-15);
    assert_eq!(accel.y, 0.0);
    assert_eq!(accel.z, 0.0);
}

#[test]
fn test_positive_tau_inc_removes_vertical_velocity() {
    let dr = Vector3::new(1.0, 0.0, 0.0);
    let dv = Vector3::new(0.0, 1.0, 0.1);
    let rates = MigrationRates {
        tau_inc: 5.0,
        ..MigrationRates::NONE
    };

    let accel = assemble_acceleration(&dr, &dv, &rates).unwrap();
    assert_relative_eq!(accel.z, -0.04, epsilon = 1e-15);
}

#[test]
fn test_damping_term_needs_separation() {
    let rates = MigrationRates {
        tau_e: 10.0,
        ..MigrationRates::NONE
    };
    let dv = Vector3::new(0.0, 1.0, 0.0);
    let err = assemble_acceleration(&Vector3::zeros(), &dv, &rates).unwrap_err();
    assert!(matches!(err, MigrationError::Domain { quantity: "radius", .. }));
}

#[test]
fn test_particle_tau_a_override_ignores_invalid_disc() {
    let mut force_params = disc_params();
    force_params.set("disc_edge_width", 7.0);
    force_params.remove("alpha");

    let particle = planet(1e-5).with_param("tau_a", 1.0e4).with_param("tau_e", f64::INFINITY);
    let accel = particle_acceleration(1.0, &particle, &star(), &force_params).unwrap();

    assert_relative_eq!(accel.y, -1.0e-4, max_relative = 1e-12);
    assert_eq!(accel.x, 0.0);
}

#[test]
fn test_particle_on_disc_path_in_trap_is_pushed_forward() {
    let accel = particle_acceleration(1.0, &planet(1e-5), &star(), &disc_params()).unwrap();

    // a slightly below the edge: strongly negative rate, so the drag turns into a push
    assert!(accel.y > 0.0);
}

#[test]
fn test_particle_without_disc_or_overrides_feels_nothing() {
    let accel = particle_acceleration(1.0, &planet(1e-5), &star(), &Params::new()).unwrap();
    assert_eq!(accel, Vector3::zeros());
}

#[test]
fn test_non_positive_planet_mass_is_domain_error() {
    for mass in [0.0, -1e-5] {
        let err = particle_acceleration(1.0, &planet(mass), &star(), &disc_params()).unwrap_err();
        assert!(matches!(err, MigrationError::Domain { quantity: "planet mass", .. }), "{err}");
    }
}

#[test]
fn test_non_positive_mass_rejected_even_with_overrides() {
    for mass in [0.0, -1.0, f64::NAN] {
        let overridden = planet(mass).with_param("tau_a", 1.0e4).with_param("tau_e", 1.0e3);
        let err = particle_acceleration(1.0, &overridden, &star(), &Params::new()).unwrap_err();
        assert!(matches!(err, MigrationError::Domain { quantity: "planet mass", .. }), "{err}");

        // No disc and no overrides would otherwise give a zero acceleration
        let err = particle_acceleration(1.0, &planet(mass), &star(), &Params::new()).unwrap_err();
        assert!(matches!(err, MigrationError::Domain { quantity: "planet mass", .. }), "{err}");
    }
}

#[test]
fn test_incomplete_disc_is_configuration_error() {
    let mut force_params = disc_params();
    force_params.remove("initial_disc_surface_density");

    let err = particle_acceleration(1.0, &planet(1e-5), &star(), &force_params).unwrap_err();
    match err {
        MigrationError::Configuration { key, .. } => {
            assert_eq!(key, "initial_disc_surface_density")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unusable_override_is_configuration_error() {
    for value in [0.0, f64::NAN] {
        let particle = planet(1e-5).with_param("tau_e", value);
        let err = particle_acceleration(1.0, &particle, &star(), &Params::new()).unwrap_err();
        assert!(matches!(err, MigrationError::Configuration { .. }));
    }

    let particle = planet(1e-5).with_param("tau_a", Coordinates::Jacobi);
    let err = particle_acceleration(1.0, &particle, &star(), &Params::new()).unwrap_err();
    assert!(matches!(err, MigrationError::Configuration { ref key, .. } if key == "tau_a"));
}

#[test]
fn test_orbit_error_propagates() {
    let escaping = Body::new(1e-5, [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let err = particle_acceleration(1.0, &escaping, &star(), &disc_params()).unwrap_err();
    assert!(matches!(err, MigrationError::Orbit(OrbitError::Unbound { .. })));
}

#[test]
fn test_overrides_follow_parameter_changes() {
    let mut particle = planet(1e-5).with_param("tau_a", 1.0e3);
    let first = particle_acceleration(1.0, &particle, &star(), &Params::new()).unwrap();

    particle.params.remove("tau_a");
    let second = particle_acceleration(1.0, &particle, &star(), &Params::new()).unwrap();

    assert!(first.y < 0.0);
    assert_eq!(second, Vector3::zeros());
}
