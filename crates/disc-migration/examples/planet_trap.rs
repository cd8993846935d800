//! Planet trap example
//!
//! A low-mass planet starts outside the inner edge of a power-law disc,
//! migrates inward, and stalls where the trap factor changes sign just
//! inside the outer boundary of the trap zone.
//!
//! Units: G = 1, stellar mass 1, edge at unit radius.
//!
//! Run with: cargo run --package disc-migration --example planet_trap

use std::error::Error;

use nalgebra::{Point3, Vector3};
use nbody::forces::{CompositeForce, DirectGravity, ForceModel};
use nbody::frames::Coordinates;
use nbody::integrator::{Integrator, Leapfrog};
use nbody::orbit::orbit_of;
use nbody::state::SystemState;

use disc_migration::trap::trap_factor;
use disc_migration::{DiscParameters, MigrationConfig, TypeIMigration};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Type I Migration: Planet Trap at the Inner Disc Edge\n");
    println!("{}", "=".repeat(60));

    let disc = DiscParameters {
        inner_disc_edge: 1.0,
        disc_edge_width: 0.1,
        beta: 0.0,
        alpha: 1.0,
        initial_disc_surface_density: 1.5e-8,
    };

    let mut system = SystemState::new(1.0);
    system.add_body(1.0, Point3::origin(), Vector3::zeros());

    let a0 = 2.0;
    let planet_mass = 1e-5;
    let v_circular = (system.g * (1.0 + planet_mass) / a0).sqrt();
    system.add_body(planet_mass, Point3::new(a0, 0.0, 0.0), Vector3::new(0.0, v_circular, 0.0));

    println!("Disc:");
    println!("  Inner edge: {:.2}", disc.inner_disc_edge);
    println!(
        "  Trap zone: {:.2} - {:.2}",
        disc.inner_disc_edge * (1.0 - disc.disc_edge_width),
        disc.inner_disc_edge * (1.0 + disc.disc_edge_width)
    );
    println!(
        "  Σ₀ = {:.2e}, α = {}, β = {}",
        disc.initial_disc_surface_density, disc.alpha, disc.beta
    );
    println!("\nPlanet: m = {planet_mass:.1e}, a = {a0:.2}");

    let migration = TypeIMigration::from_config(&MigrationConfig {
        coordinates: Coordinates::Jacobi,
        disc: Some(disc),
    });
    let force = CompositeForce::new()
        .with_force(DirectGravity::new())
        .with_force(migration);

    let integrator = Leapfrog::new();
    let dt = 0.01;
    let report_every: f64 = 20.0;
    let n_reports = 15;
    let steps_per_report = (report_every / dt).round() as usize;

    let initial_l = system.total_angular_momentum();
    let initial_energy = system.kinetic_energy() + force.potential_energy(&system);

    println!("\nIntegrating ({} steps per report)...\n", steps_per_report);
    for _ in 0..n_reports {
        integrator.integrate(&mut system, dt, steps_per_report, &force)?;

        let orbit = orbit_of(system.g, &system.bodies[1], &system.bodies[0])?;
        println!(
            "t = {:6.1}: a = {:.4}, e = {:.2e}, trap factor = {:+.3}",
            system.time,
            orbit.a,
            orbit.e,
            trap_factor(orbit.a, disc.disc_edge_width, disc.inner_disc_edge)
        );
    }

    let final_l = system.total_angular_momentum();
    let final_energy = system.kinetic_energy() + force.potential_energy(&system);

    println!("\n{}", "=".repeat(60));
    println!("Angular momentum: {:.6e} -> {:.6e}", initial_l.z, final_l.z);
    println!("Energy: {initial_energy:.6e} -> {final_energy:.6e}");

    let orbit = orbit_of(system.g, &system.bodies[1], &system.bodies[0])?;
    let trap_zone_outer = disc.inner_disc_edge * (1.0 + disc.disc_edge_width);
    if orbit.a < a0 && orbit.a > disc.inner_disc_edge {
        println!("✓ Planet migrated inward and stalled at a = {:.4}", orbit.a);
    } else {
        println!(
            "✗ Planet ended at a = {:.4} (trap zone outer edge {trap_zone_outer:.2})",
            orbit.a
        );
    }

    Ok(())
}
