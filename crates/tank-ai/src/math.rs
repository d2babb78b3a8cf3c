//! Minimal 3D vector and planar transform.
//!
//! The world is y-up with +z as the tank's forward axis when its yaw is zero.
//! Positive yaw rotates toward the tank's right (+x), which is also the sign
//! convention of turn actuation.

use std::ops::{Add, Mul, Sub};

/// Below this length a vector has no usable direction.
const DIRECTION_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or zero for (near-)zero vectors.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > DIRECTION_EPSILON {
            self * (1.0 / length)
        } else {
            Self::ZERO
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Position plus heading about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    /// Heading in radians; positive turns toward the right.
    pub yaw: f32,
}

impl Transform {
    pub const fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Expresses a world-space point in this transform's local frame
    /// (x = right, y = up, z = forward).
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        let offset = point - self.position;
        Vec3::new(offset.dot(self.right()), offset.y, offset.dot(self.forward()))
    }
}
