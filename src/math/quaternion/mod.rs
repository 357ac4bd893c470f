// Copyright 2026 versor contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

mod convert;
mod euler;
mod geodesic;
mod interpolate;

pub use euler::EulerOrder;

use serde::{Deserialize, Serialize};

use super::{RigidTransform, Vec3, EPSILON};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion for efficient 3D rotations.
///
/// Quaternions are a four-dimensional complex number system that can
/// represent rotations in 3D space. They are generally more efficient and
/// numerically stable than rotation matrices, avoiding issues like gimbal
/// lock.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the
/// imaginary (vector) part and `w` is the real (scalar) part. For
/// representing rotations it should be a "unit quaternion" where
/// `x² + y² + z² + w² = 1`; construction never normalizes implicitly, and
/// the operations that require unit length (rotating vectors, slerp,
/// axis-angle extraction) normalize on demand internally.
///
/// The value is immutable in the algebraic sense: every operation yields a
/// new instance, and no operation mutates its operands. `q` and `-q`
/// represent the identical rotation (the double cover); operations that care
/// about the shortest path ([`Quaternion::slerp`],
/// [`Quaternion::difference`], the symmetrized distances) resolve the sign
/// ambiguity explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the imaginary part.
    pub x: f64,
    /// The y component of the imaginary part.
    pub y: f64,
    /// The z component of the imaginary part.
    pub z: f64,
    /// The real (scalar) part.
    pub w: f64,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// The zero quaternion. Degenerate: it has zero magnitude and is not a
    /// valid rotation.
    pub const ZERO: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating
    /// rotations, prefer [`Quaternion::from_axis_angle`] or another
    /// rotation-specific constructor.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Embeds a vector as a pure-imaginary quaternion `(v.x, v.y, v.z, 0)`.
    #[inline]
    pub const fn from_vector(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: 0.0,
        }
    }

    /// Creates a pure-real quaternion `(0, 0, 0, w)`.
    #[inline]
    pub const fn from_real(w: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w,
        }
    }

    /// Returns the imaginary part as a vector.
    #[inline]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the real-only projection `(0, 0, 0, w)`.
    #[inline]
    pub const fn real(&self) -> Self {
        Self::from_real(self.w)
    }

    /// Returns the imaginary-only projection `(x, y, z, 0)`.
    #[inline]
    pub const fn imaginary(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z,
            w: 0.0,
        }
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Calculates the length of the quaternion with an overflow-safe
    /// formulation: components are divided by the largest absolute component
    /// before squaring, then the result is rescaled. Prefer this over
    /// [`Quaternion::magnitude`] when components may be near the
    /// floating-point range limits.
    pub fn hypot(&self) -> f64 {
        let max = self
            .x
            .abs()
            .max(self.y.abs())
            .max(self.z.abs())
            .max(self.w.abs());
        if max == 0.0 {
            return 0.0;
        }
        let x = self.x / max;
        let y = self.y / max;
        let z = self.z / max;
        let w = self.w / max;
        max * (x * x + y * y + z * z + w * w).sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion has zero magnitude, it returns the identity
    /// quaternion; this is an explicit degenerate-case policy, not an error.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self * (1.0 / mag)
        } else {
            Self::IDENTITY
        }
    }

    /// Returns `true` if the quaternion's length is within `epsilon` of 1.
    #[inline]
    pub fn is_unit_eps(&self, epsilon: f64) -> bool {
        (self.magnitude() - 1.0).abs() < epsilon
    }

    /// Returns `true` if the quaternion's length is within [`EPSILON`] of 1.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.is_unit_eps(EPSILON)
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x != self.x || self.y != self.y || self.z != self.z || self.w != self.w
    }

    /// Computes the conjugate of the quaternion, which negates the imaginary
    /// part. Distinct from negation, which flips all four components.
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of the quaternion, `conjugate / magnitude²`.
    ///
    /// For a unit quaternion the inverse equals the conjugate. Inverting the
    /// zero quaternion yields non-finite components rather than an error;
    /// callers must guard against it themselves.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() * (1.0 / self.magnitude_squared())
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Raises the quaternion to a real power via polar decomposition: the
    /// magnitude is raised to `n` and the polar angle is scaled by `n`.
    ///
    /// When the imaginary magnitude is within [`EPSILON`] of zero relative
    /// to the total magnitude, the result is the pure-real quaternion
    /// `(0, 0, 0, magnitude^n)`, avoiding a division by a near-zero axis
    /// length.
    pub fn powf(&self, n: f64) -> Self {
        let mag = self.magnitude();
        let v = self.vector();
        let v_len = v.length();
        if v_len <= EPSILON * mag {
            return Self::from_real(mag.powf(n));
        }
        let theta = (self.w / mag).acos();
        let scaled_mag = mag.powf(n);
        let s = scaled_mag * (n * theta).sin() / v_len;
        Self {
            x: v.x * s,
            y: v.y * s,
            z: v.z * s,
            w: scaled_mag * (n * theta).cos(),
        }
    }

    /// Rotates a 3D vector by this quaternion.
    ///
    /// The quaternion must be a unit quaternion for the result to be a pure
    /// rotation; the `Mul<Vec3>` operator normalizes first and then calls
    /// this.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let s = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    /// Renders the four components joined by `", "`, each independently
    /// rounded to `decimals` decimal places. With `None`, components use
    /// default numeric formatting (this is what `Display` does).
    pub fn to_string_with_decimals(&self, decimals: Option<u32>) -> String {
        match decimals {
            Some(d) => {
                let scale = 10f64.powi(d as i32);
                let round = |c: f64| (c * scale).round() / scale;
                format!(
                    "{}, {}, {}, {}",
                    round(self.x),
                    round(self.y),
                    round(self.z),
                    round(self.w)
                )
            }
            None => format!("{}, {}, {}, {}", self.x, self.y, self.z, self.w),
        }
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    ///
    /// The constructor's "missing components" default to `(0, 0, 0, 1)`:
    /// the default quaternion is the identity rotation, not the zero
    /// quaternion.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_decimals(None))
    }
}

impl PartialOrd for Quaternion {
    /// Orders quaternions by raw magnitude only.
    ///
    /// This is a deliberately weak ordering with no rotational meaning --
    /// it merely checks which operand is "closer to identity" in the
    /// Euclidean sense. Distinct quaternions of equal magnitude are
    /// incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.magnitude().partial_cmp(&other.magnitude()) {
            Some(Ordering::Equal) => None,
            ord => ord,
        }
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all four components by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;
    /// Scales all four components by a scalar.
    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion, normalizing first.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vector(rhs)
    }
}

impl Mul<RigidTransform> for Quaternion {
    type Output = RigidTransform;
    /// Composes this quaternion's equivalent transform with the given
    /// transform (rotation applied on the left; normalizes first).
    fn mul(self, rhs: RigidTransform) -> Self::Output {
        let n = self.normalize();
        RigidTransform::new(
            n.rotate_vector(rhs.position),
            n.rotate_vector(rhs.right),
            n.rotate_vector(rhs.up),
            n.rotate_vector(rhs.back),
        )
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    /// Divides all four components by a scalar.
    #[inline]
    fn div(self, scalar: f64) -> Self::Output {
        let inv = 1.0 / scalar;
        self * inv
    }
}

impl Div<Quaternion> for f64 {
    type Output = Quaternion;
    /// Divides the scalar by each quaternion component.
    #[inline]
    fn div(self, rhs: Quaternion) -> Self::Output {
        Quaternion {
            x: self / rhs.x,
            y: self / rhs.y,
            z: self / rhs.z,
            w: self / rhs.w,
        }
    }
}

impl Div<Quaternion> for Quaternion {
    type Output = Self;
    /// Multiplies this quaternion by the inverse of the right-hand operand.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all four components. Under the double cover, `-q` represents
    /// the identical rotation to `q`.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
