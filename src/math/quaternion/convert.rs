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

//! Conversions between quaternions and axis-angle form, rotation matrices,
//! rigid transforms, and randomness-driven construction.

use super::Quaternion;
use crate::math::{RigidTransform, Vec3, EPSILON};

impl Quaternion {
    /// Creates a quaternion representing a rotation around a given axis by a
    /// given angle in radians. The axis is normalized defensively; see
    /// [`Quaternion::from_axis_angle_fast`] to skip that when the axis is
    /// already unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        Self::from_axis_angle_fast(axis.normalize(), angle)
    }

    /// Creates a quaternion from a **pre-normalized** axis and an angle in
    /// radians. No defensive check is performed.
    #[inline]
    pub fn from_axis_angle_fast(axis: Vec3, angle: f64) -> Self {
        let half_angle = angle * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Extracts the rotation as a unit axis and an angle in radians.
    ///
    /// The quaternion is normalized first. When the sine-half-angle term is
    /// below [`EPSILON`] (a near-zero rotation), the raw imaginary vector is
    /// returned as the axis instead of dividing by a near-zero value.
    pub fn to_axis_angle(&self) -> (Vec3, f64) {
        let n = self.normalize();
        let angle = 2.0 * n.w.clamp(-1.0, 1.0).acos();
        let sin_half = n.vector().length();
        if sin_half < EPSILON {
            (n.vector(), angle)
        } else {
            (n.vector() / sin_half, angle)
        }
    }

    /// Creates a quaternion from three basis vectors after a
    /// Gram-Schmidt-style orthonormalization.
    ///
    /// Degenerate input falls back axis by axis: a zero `right` becomes +X,
    /// an `up` parallel to `right` is replaced with the least-aligned world
    /// axis, and a `back` that lies in the right/up plane is replaced with
    /// `right x up`. Each fallback is logged at debug level.
    pub fn from_basis(right: Vec3, up: Vec3, back: Vec3) -> Self {
        let r = {
            let r = right.normalize();
            if r == Vec3::ZERO {
                log::debug!("from_basis: degenerate right vector, substituting +X");
                Vec3::X
            } else {
                r
            }
        };

        let mut u = (up - r * up.dot(r)).normalize();
        if u == Vec3::ZERO {
            log::debug!("from_basis: up is parallel to right, substituting a world axis");
            let candidate = if r.dot(Vec3::Y).abs() < 1.0 - EPSILON {
                Vec3::Y
            } else {
                Vec3::Z
            };
            u = (candidate - r * candidate.dot(r)).normalize();
        }

        let mut b = (back - r * back.dot(r) - u * back.dot(u)).normalize();
        if b == Vec3::ZERO {
            log::debug!("from_basis: back lies in the right/up plane, substituting right x up");
            b = r.cross(u);
        }

        Self::from_orthonormal_basis(r, u, b)
    }

    /// Creates a quaternion from the columns of a 3x3 rotation matrix.
    ///
    /// The columns are assumed orthonormal; no orthonormalization is
    /// performed (use [`Quaternion::from_basis`] for untrusted input). The
    /// `back` column may be omitted, in which case it is computed as
    /// `right x up`.
    #[inline]
    pub fn from_matrix(right: Vec3, up: Vec3, back: Option<Vec3>) -> Self {
        let back = back.unwrap_or_else(|| right.cross(up));
        Self::from_orthonormal_basis(right, up, back)
    }

    /// Derives the quaternion from an orthonormalized basis using
    /// trace-based branch selection: the branch is keyed on the largest
    /// diagonal term so the scale factor divided by is never near zero,
    /// which keeps the extraction stable near 180-degree rotations.
    //
    // Algorithm from
    // http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
    fn from_orthonormal_basis(right: Vec3, up: Vec3, back: Vec3) -> Self {
        let (m00, m10, m20) = (right.x, right.y, right.z);
        let (m01, m11, m21) = (up.x, up.y, up.z);
        let (m02, m12, m22) = (back.x, back.y, back.z);

        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (m21 - m12) / s;
            q.y = (m02 - m20) / s;
            q.z = (m10 - m01) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (m21 - m12) / s;
            q.x = 0.25 * s;
            q.y = (m01 + m10) / s;
            q.z = (m02 + m20) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (m02 - m20) / s;
            q.x = (m01 + m10) / s;
            q.y = 0.25 * s;
            q.z = (m12 + m21) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (m10 - m01) / s;
            q.x = (m02 + m20) / s;
            q.y = (m12 + m21) / s;
            q.z = 0.25 * s;
        }
        q.normalize()
    }

    /// Creates a quaternion facing along `look`, with `up` selecting the
    /// roll.
    ///
    /// When the look direction is parallel to `up`, the fallback is tiered:
    /// first the world +Y axis is tried as a substitute up vector, then the
    /// fixed secondary +X axis. The second and third tiers are logged at
    /// debug level.
    pub fn look_at(look: Vec3, up: Vec3) -> Self {
        let back = -look.normalize();

        let mut right = up.cross(back);
        if right.length_squared() <= EPSILON * EPSILON {
            log::debug!("look_at: up is parallel to look, falling back to world +Y");
            right = Vec3::Y.cross(back);
        }
        if right.length_squared() <= EPSILON * EPSILON {
            log::debug!("look_at: look is vertical, falling back to the +X axis");
            right = Vec3::X.cross(back);
        }

        let right = right.normalize();
        let up = back.cross(right);
        Self::from_orthonormal_basis(right, up, back)
    }

    /// Extracts the rotation from a rigid transform's basis columns.
    ///
    /// The basis is assumed orthonormal, as produced by
    /// [`Quaternion::to_transform`].
    #[inline]
    pub fn from_transform(transform: &RigidTransform) -> Self {
        Self::from_orthonormal_basis(transform.right, transform.up, transform.back)
    }

    /// Builds a rigid transform with the given position and this rotation.
    /// The quaternion is normalized first.
    pub fn to_transform(&self, position: Vec3) -> RigidTransform {
        let (right, up, back) = self.to_matrix_vectors();
        RigidTransform::new(position, right, up, back)
    }

    /// Returns the rotation matrix as nine scalars in row-major order:
    /// `(m00, m01, m02, m10, m11, m12, m20, m21, m22)`.
    ///
    /// The quaternion is normalized first.
    #[allow(clippy::type_complexity)]
    pub fn to_matrix(&self) -> (f64, f64, f64, f64, f64, f64, f64, f64, f64) {
        let (right, up, back) = self.to_matrix_vectors();
        (
            right.x, up.x, back.x, right.y, up.y, back.y, right.z, up.z, back.z,
        )
    }

    /// Returns the rotation matrix as its three basis columns
    /// `(right, up, back)`: the images of the +X, +Y, and +Z axes.
    ///
    /// The quaternion is normalized first.
    pub fn to_matrix_vectors(&self) -> (Vec3, Vec3, Vec3) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let right = Vec3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + z * w),
            2.0 * (x * z - y * w),
        );
        let up = Vec3::new(
            2.0 * (x * y - z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + x * w),
        );
        let back = Vec3::new(
            2.0 * (x * z + y * w),
            2.0 * (y * z - x * w),
            1.0 - 2.0 * (x * x + y * y),
        );
        (right, up, back)
    }

    /// Draws a uniformly distributed random unit quaternion from the given
    /// generator (Shoemake's subgroup algorithm).
    ///
    /// The generator is threaded explicitly; seeding it (e.g.
    /// `fastrand::Rng::with_seed`) is the caller's observable choice and is
    /// never performed implicitly by this crate.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let u1 = rng.f64();
        let u2 = crate::math::TAU * rng.f64();
        let u3 = crate::math::TAU * rng.f64();
        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        Self {
            x: a * u2.sin(),
            y: a * u2.cos(),
            z: b * u3.sin(),
            w: b * u3.cos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let axis = Vec3::new(-1.0, 2.5, 0.7).normalize();
        let angle = 1.85;
        let q = Quaternion::from_axis_angle(axis, angle);
        let (out_axis, out_angle) = q.to_axis_angle();
        assert!(vec3_approx_eq(out_axis, axis));
        assert_relative_eq!(out_angle, angle, epsilon = 1e-9);
    }

    #[test]
    fn test_axis_angle_negative_angle_round_trip() {
        let axis = Vec3::new(0.0, 1.0, 0.0);
        let angle = -2.1;
        let q = Quaternion::from_axis_angle(axis, angle);
        let (out_axis, out_angle) = q.to_axis_angle();
        // The extracted angle is non-negative; the axis carries the sign.
        assert!(vec3_approx_eq(out_axis, -axis));
        assert_relative_eq!(out_angle, -angle, epsilon = 1e-9);
    }

    #[test]
    fn test_axis_angle_small_angle_fallback() {
        let (axis, angle) = Quaternion::IDENTITY.to_axis_angle();
        assert_eq!(axis, Vec3::ZERO);
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let q_raw = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), FRAC_PI_2);
        let q_unit = Quaternion::from_axis_angle_fast(Vec3::Y, FRAC_PI_2);
        assert!(q_raw.approx_eq(q_unit));
        assert!(q_raw.is_unit());
    }

    #[test]
    fn test_rotation_concrete_scenario() {
        // 90 degrees about +Y carries +X to -Z.
        let q = Quaternion::from_axis_angle(Vec3::Y, PI / 2.0);
        let v = q * Vec3::X;
        assert!(vec3_approx_eq(v, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_matrix_round_trip() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.4, -0.9, 1.3), 2.4);
        let (right, up, back) = q.to_matrix_vectors();
        let q2 = Quaternion::from_matrix(right, up, Some(back));
        assert!(q2.approx_eq(q));
    }

    #[test]
    fn test_matrix_round_trip_near_pi() {
        // Near 180 degrees the trace branch would divide by a near-zero
        // scale; the largest-diagonal branches keep the extraction stable.
        for axis in [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
        ] {
            let q = Quaternion::from_axis_angle(axis, PI - 1e-7);
            let (right, up, back) = q.to_matrix_vectors();
            let q2 = Quaternion::from_matrix(right, up, Some(back));
            assert!(q2.approx_eq_eps(q, 1e-5));
        }
    }

    #[test]
    fn test_from_matrix_computes_missing_back_column() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.2, 1.0, 0.5), 1.0);
        let (right, up, back) = q.to_matrix_vectors();
        let q2 = Quaternion::from_matrix(right, up, None);
        assert!(q2.approx_eq(q));
        assert!(vec3_approx_eq(right.cross(up), back));
    }

    #[test]
    fn test_double_cover_same_matrix() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, -0.3, 0.8), 1.9);
        let (r1, u1, b1) = q.to_matrix_vectors();
        let (r2, u2, b2) = (-q).to_matrix_vectors();
        assert!(vec3_approx_eq(r1, r2));
        assert!(vec3_approx_eq(u1, u2));
        assert!(vec3_approx_eq(b1, b2));
    }

    #[test]
    fn test_to_matrix_scalars_match_vectors() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.1, 0.7, -0.4), 0.8);
        let (m00, m01, m02, m10, m11, m12, m20, m21, m22) = q.to_matrix();
        let (right, up, back) = q.to_matrix_vectors();
        assert_eq!((m00, m10, m20), (right.x, right.y, right.z));
        assert_eq!((m01, m11, m21), (up.x, up.y, up.z));
        assert_eq!((m02, m12, m22), (back.x, back.y, back.z));
    }

    #[test]
    fn test_from_basis_orthonormalizes() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, 0.9, -0.2), 1.4);
        let (right, up, back) = q.to_matrix_vectors();
        // Perturb the basis; Gram-Schmidt should recover a nearby rotation.
        let q2 = Quaternion::from_basis(right * 2.0, up + right * 0.001, back * 0.5);
        assert!(q2.approx_eq_eps(q, 1e-2));
    }

    #[test]
    fn test_from_basis_degenerate_input() {
        // Parallel up falls back to a world axis; the result is still a
        // valid unit rotation with the requested right vector.
        let q = Quaternion::from_basis(Vec3::X, Vec3::X * 3.0, Vec3::X);
        assert!(q.is_unit());
        let (right, _, _) = q.to_matrix_vectors();
        assert!(vec3_approx_eq(right, Vec3::X));

        let q_zero = Quaternion::from_basis(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert!(q_zero.is_unit());
    }

    #[test]
    fn test_look_at_faces_target() {
        let q = Quaternion::look_at(Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        assert!(q.approx_eq(Quaternion::IDENTITY));

        let q = Quaternion::look_at(Vec3::X, Vec3::Y);
        let (_, _, back) = q.to_matrix_vectors();
        assert!(vec3_approx_eq(-back, Vec3::X));
    }

    #[test]
    fn test_look_at_parallel_up_fallbacks() {
        // Looking straight up: the given up vector is useless, tier two
        // (world +Y) is also parallel, tier three (+X) resolves it.
        let q = Quaternion::look_at(Vec3::Y, Vec3::Y);
        assert!(q.is_unit());
        let (_, _, back) = q.to_matrix_vectors();
        assert!(vec3_approx_eq(-back, Vec3::Y));

        // Looking along -Z with up parallel to look: tier two suffices.
        let q = Quaternion::look_at(Vec3::Z, Vec3::Z);
        assert!(q.is_unit());
        let (_, _, back) = q.to_matrix_vectors();
        assert!(vec3_approx_eq(-back, Vec3::Z));
    }

    #[test]
    fn test_transform_round_trip() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.2, -0.4, 0.3), 2.0);
        let t = q.to_transform(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        let q2 = Quaternion::from_transform(&t);
        assert!(q2.approx_eq(q));
    }

    #[test]
    fn test_to_transform_normalizes() {
        let q = Quaternion::from_axis_angle(Vec3::Y, 0.9) * 4.0;
        let t = q.to_transform(Vec3::ZERO);
        assert_relative_eq!(t.right.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.up.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.back.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_is_unit_and_deterministic() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..32 {
            let q = Quaternion::random(&mut rng);
            assert!(q.is_unit());
        }

        let mut rng_a = fastrand::Rng::with_seed(7);
        let mut rng_b = fastrand::Rng::with_seed(7);
        assert_eq!(
            Quaternion::random(&mut rng_a),
            Quaternion::random(&mut rng_b)
        );
    }
}
