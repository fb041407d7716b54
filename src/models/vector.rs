use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point or offset on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn scale(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector in the same direction, or the zero vector unchanged.
    pub fn normalize(self) -> Vec2 {
        let length = self.length();
        if length == 0.0 {
            self
        } else {
            self.scale(1.0 / length)
        }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A position, velocity or set of Euler angles in world space.
///
/// All operations return new values. NaN and infinities propagate untouched;
/// keeping inputs finite is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn scale(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// # Example
    /// ```
    /// use rs_cube_stack::models::Vec3;
    ///
    /// let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
    /// assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector in the same direction, or the zero vector unchanged.
    pub fn normalize(self) -> Vec3 {
        let length = self.length();
        if length == 0.0 {
            self
        } else {
            self.scale(1.0 / length)
        }
    }

    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }

    /// Right-handed rotation about the X axis.
    pub fn rotate_x(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x, self.y * cos - self.z * sin, self.z * cos + self.y * sin)
    }

    /// Right-handed rotation about the Y axis.
    pub fn rotate_y(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos + self.z * sin, self.y, self.z * cos - self.x * sin)
    }

    /// Right-handed rotation about the Z axis.
    pub fn rotate_z(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin, self.z)
    }

    /// Applies Euler angles in X, then Y, then Z order.
    pub fn rotate_euler(self, angles: Vec3) -> Vec3 {
        self.rotate_x(angles.x).rotate_y(angles.y).rotate_z(angles.z)
    }

    pub fn max_abs_component(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        self.scale(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        self.scale(scalar)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from(coord: (f64, f64, f64)) -> Self {
        Vec3::new(coord.0, coord.1, coord.2)
    }
}

impl From<Vec3> for (f64, f64, f64) {
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from(coord: (f64, f64)) -> Self {
        Vec2::new(coord.0, coord.1)
    }
}
