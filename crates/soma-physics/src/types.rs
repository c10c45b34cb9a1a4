//! Core physics types: vectors, snapshots, and diagnostics.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A 3D vector used for positions, velocities, and forces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component (up axis).
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Get the magnitude (length) of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        (*other - *self).magnitude()
    }

    /// Normalize to a unit vector; zero-length vectors stay zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag > 1e-8 {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        } else {
            Self::zero()
        }
    }

    /// Convert to nalgebra Vector3.
    #[must_use]
    pub fn to_vector3(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Create from nalgebra Vector3.
    #[must_use]
    pub fn from_vector3(v: &Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// One entry of the per-step position snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointState {
    /// Stable external key of the mass point.
    pub id: String,
    /// Current position.
    pub position: Vec3,
}

/// Engine diagnostics for export and UI panels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhysicsData {
    /// Whether the engine is currently stepping.
    pub enabled: bool,
    /// Gravitational acceleration.
    pub gravity: f32,
    /// Uniform velocity damping factor.
    pub damping: f32,
    /// Global spring stiffness.
    pub stiffness: f32,
    /// Number of mass points.
    pub mass_count: usize,
    /// Number of springs.
    pub spring_count: usize,
    /// Number of anatomical distance constraints.
    pub constraint_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_normalized() {
        let v = Vec3::new(0.0, 10.0, 0.0);
        let n = v.normalized();
        assert!((n.y - 1.0).abs() < 0.001);
        assert!((n.magnitude() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_normalized_zero_stays_zero() {
        let n = Vec3::zero().normalized();
        assert!(n.magnitude() < 0.001);
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, -10.0, 0.0);
        assert!((a.distance(&b) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_vector3_round_trip() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let back = Vec3::from_vector3(&v.to_vector3());
        assert!((v.x - back.x).abs() < 0.001);
        assert!((v.y - back.y).abs() < 0.001);
        assert!((v.z - back.z).abs() < 0.001);
    }

    #[test]
    fn test_vector_ops() {
        let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(1.0, 1.0, 1.0) * 2.0;
        assert!((v.x - 3.0).abs() < 0.001);
        assert!((v.y - 4.0).abs() < 0.001);
        assert!((v.z - 5.0).abs() < 0.001);
    }
}
