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

//! Rigid transforms: a position plus an orthonormal rotation basis.

use serde::{Deserialize, Serialize};

use super::Vec3;
use std::ops::Mul;

/// A rigid transform in 3D space: a translation plus a rotation.
///
/// The rotation is stored as three orthonormal basis columns: `right` is the
/// image of the +X axis, `up` the image of +Y, and `back` the image of +Z
/// (so the look direction is `-back`). The type is a value type; no
/// orthonormality check is performed at construction, and constructors that
/// need a valid rotation basis (such as
/// [`Quaternion::from_transform`](crate::Quaternion::from_transform))
/// document how they cope with a degenerate one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct RigidTransform {
    /// The translation component.
    pub position: Vec3,
    /// The image of the +X axis under the rotation.
    pub right: Vec3,
    /// The image of the +Y axis under the rotation.
    pub up: Vec3,
    /// The image of the +Z axis under the rotation.
    pub back: Vec3,
}

impl RigidTransform {
    /// The identity transform, which results in no change.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        right: Vec3::X,
        up: Vec3::Y,
        back: Vec3::Z,
    };

    /// Creates a transform from a position and three rotation basis columns.
    #[inline]
    pub const fn new(position: Vec3, right: Vec3, up: Vec3, back: Vec3) -> Self {
        Self {
            position,
            right,
            up,
            back,
        }
    }

    /// Creates a pure translation with the identity rotation.
    #[inline]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            right: Vec3::X,
            up: Vec3::Y,
            back: Vec3::Z,
        }
    }

    /// The direction this transform is facing, `-back`.
    #[inline]
    pub fn look(&self) -> Vec3 {
        -self.back
    }

    /// Applies only the rotation part of the transform to a vector.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.right * v.x + self.up * v.y + self.back * v.z
    }

    /// Applies the full transform (rotation, then translation) to a point.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.transform_vector(p)
    }
}

impl Default for RigidTransform {
    /// Returns [`RigidTransform::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<RigidTransform> for RigidTransform {
    type Output = Self;
    /// Composes two transforms; the right-hand transform is applied first.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            position: self.transform_point(rhs.position),
            right: self.transform_vector(rhs.right),
            up: self.transform_vector(rhs.up),
            back: self.transform_vector(rhs.back),
        }
    }
}

impl Mul<Vec3> for RigidTransform {
    type Output = Vec3;
    /// Applies the full transform to a point.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_point(rhs)
    }
}
