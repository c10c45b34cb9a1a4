//! Force accumulation: gravity, springs, wind, and explosion fields.
//!
//! All forces land in the per-point accumulator and take effect at the next
//! integration. Fixed points never accumulate force.

use crate::point::MassPointSet;
use crate::spring::SpringNetwork;
use crate::types::Vec3;

/// Apply gravity to every non-fixed mass: `force.y -= mass * g`.
pub fn apply_gravity(points: &mut MassPointSet, gravity: f32) {
    for point in points.points_mut() {
        if !point.fixed {
            point.force.y -= point.mass * gravity;
        }
    }
}

/// Accumulate Hooke's-law spring forces.
///
/// For each spring, the force magnitude is `stiffness × (distance −
/// rest_length)` along the normalized separation vector, added to one
/// endpoint and subtracted from the other. A spring whose endpoints are
/// exactly coincident is skipped for the step.
pub fn apply_spring_forces(points: &mut MassPointSet, springs: &SpringNetwork) {
    for spring in springs.iter() {
        let (pa, pb) = points.pair_mut(spring.a, spring.b);
        let delta = pb.position - pa.position;
        let distance = delta.magnitude();
        if distance == 0.0 {
            continue;
        }
        let magnitude = spring.stiffness * (distance - spring.rest_length);
        let force = delta * (magnitude / distance);
        if !pa.fixed {
            pa.force += force;
        }
        if !pb.fixed {
            pb.force -= force;
        }
    }
}

/// Apply a wind force to every non-fixed mass: `force += wind * mass`.
///
/// The wind persists only in the accumulator, i.e. for the step(s) before
/// the next clear.
pub fn apply_wind(points: &mut MassPointSet, wind: Vec3) {
    for point in points.points_mut() {
        if !point.fixed {
            point.force += wind * point.mass;
        }
    }
}

/// Apply a radial explosion force with linear falloff.
///
/// Every non-fixed mass strictly inside `radius` of `center` (and strictly
/// away from the exact center) receives an outward force of magnitude
/// `force × mass × (radius − distance) / radius`. Masses at or beyond the
/// radius are unaffected.
pub fn apply_explosion(points: &mut MassPointSet, center: Vec3, radius: f32, force: f32) {
    for point in points.points_mut() {
        if point.fixed {
            continue;
        }
        let delta = point.position - center;
        let distance = delta.magnitude();
        if distance <= 0.0 || distance >= radius {
            continue;
        }
        let attenuation = (radius - distance) / radius;
        point.force += delta * (force * point.mass * attenuation / distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soma_mesh::MeshVertex;

    fn spring_pair(y_b: f32) -> (MassPointSet, SpringNetwork) {
        let points = MassPointSet::from_vertices(&[
            MeshVertex::surface("a", 0.0, 0.0, 0.0),
            MeshVertex::surface("b", 0.0, -10.0, 0.0),
        ]);
        let edges = vec![("a".to_owned(), "b".to_owned())];
        let (springs, _) = SpringNetwork::from_edges(&points, &edges, 0.5);
        let mut points = points;
        points.get_mut("b").unwrap().position.y = y_b;
        (points, springs)
    }

    #[test]
    fn test_gravity_scales_with_mass() {
        let mut points = MassPointSet::from_vertices(&[MeshVertex::new(
            "p", 0.0, 0.0, 0.0, "", "surface", 2.0,
        )]);
        apply_gravity(&mut points, 9.8);
        // mass 20, force.y = -20 * 9.8
        assert!((points.get("p").unwrap().force.y + 196.0).abs() < 0.001);
    }

    #[test]
    fn test_gravity_skips_fixed() {
        let mut points = MassPointSet::from_vertices(&[MeshVertex::joint("p", 0.0, 0.0, 0.0)]);
        apply_gravity(&mut points, 9.8);
        assert!(points.get("p").unwrap().force.magnitude() < 0.001);
    }

    #[test]
    fn test_spring_at_rest_length_is_neutral() {
        let (mut points, springs) = spring_pair(-10.0);
        apply_spring_forces(&mut points, &springs);
        assert!(points.get("a").unwrap().force.magnitude() < 1e-6);
        assert!(points.get("b").unwrap().force.magnitude() < 1e-6);
    }

    #[test]
    fn test_stretched_spring_pulls_endpoints_together() {
        let (mut points, springs) = spring_pair(-20.0);
        apply_spring_forces(&mut points, &springs);
        // Stretched by 10 at stiffness 0.5: magnitude 5 along -y from a.
        assert!((points.get("a").unwrap().force.y + 5.0).abs() < 0.001);
        assert!((points.get("b").unwrap().force.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_compressed_spring_pushes_endpoints_apart() {
        let (mut points, springs) = spring_pair(-5.0);
        apply_spring_forces(&mut points, &springs);
        assert!(points.get("a").unwrap().force.y > 0.0);
        assert!(points.get("b").unwrap().force.y < 0.0);
    }

    #[test]
    fn test_coincident_spring_endpoints_skipped() {
        let (mut points, springs) = spring_pair(0.0);
        apply_spring_forces(&mut points, &springs);
        assert!(points.get("a").unwrap().force.magnitude() < 1e-6);
        assert!(points.get("b").unwrap().force.magnitude() < 1e-6);
    }

    #[test]
    fn test_wind_scales_with_mass_and_skips_fixed() {
        let mut points = MassPointSet::from_vertices(&[
            MeshVertex::new("free", 0.0, 0.0, 0.0, "", "surface", 2.0),
            MeshVertex::joint("anchor", 0.0, 0.0, 0.0),
        ]);
        apply_wind(&mut points, Vec3::new(1.5, 0.0, 0.0));
        assert!((points.get("free").unwrap().force.x - 30.0).abs() < 0.001);
        assert!(points.get("anchor").unwrap().force.magnitude() < 0.001);
    }

    #[test]
    fn test_explosion_linear_falloff() {
        let mut points = MassPointSet::from_vertices(&[
            MeshVertex::surface("near", 2.0, 0.0, 0.0),
            MeshVertex::surface("far", 8.0, 0.0, 0.0),
        ]);
        apply_explosion(&mut points, Vec3::zero(), 10.0, 3.0);
        // mass 10, attenuation (10-2)/10 = 0.8 → 3 * 10 * 0.8 = 24 outward.
        assert!((points.get("near").unwrap().force.x - 24.0).abs() < 0.001);
        // attenuation (10-8)/10 = 0.2 → 6 outward.
        assert!((points.get("far").unwrap().force.x - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_explosion_near_center_gets_full_attenuation() {
        // A separation far below unit length must still yield the full
        // attenuated magnitude, not a zero direction vector.
        let mut points =
            MassPointSet::from_vertices(&[MeshVertex::surface("close", 1e-9, 0.0, 0.0)]);
        apply_explosion(&mut points, Vec3::zero(), 10.0, 3.0);
        // mass 10, attenuation ≈ 1 → magnitude ≈ 30 outward along +x.
        assert!((points.get("close").unwrap().force.x - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_explosion_boundary_and_center_excluded() {
        let mut points = MassPointSet::from_vertices(&[
            MeshVertex::surface("at_center", 0.0, 0.0, 0.0),
            MeshVertex::surface("at_radius", 10.0, 0.0, 0.0),
            MeshVertex::surface("beyond", 15.0, 0.0, 0.0),
        ]);
        apply_explosion(&mut points, Vec3::zero(), 10.0, 3.0);
        for id in ["at_center", "at_radius", "beyond"] {
            assert!(
                points.get(id).unwrap().force.magnitude() < 1e-6,
                "{id} should be unaffected"
            );
        }
    }
}
