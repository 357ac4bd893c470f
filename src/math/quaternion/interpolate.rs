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

//! Spherical linear interpolation and rotation integration.

use super::Quaternion;
use crate::math::{Vec3, EPSILON};

impl Quaternion {
    /// Performs a spherical linear interpolation (slerp) from `self` toward
    /// `other`.
    ///
    /// Both inputs are normalized first. The shortest great-circle path is
    /// taken: when the dot product of the endpoints is negative, `self`'s
    /// sign is flipped. When the endpoints are numerically coincident
    /// (`dot >= 1`) the function falls back to a linear interpolation of
    /// components followed by normalization, avoiding a division by a
    /// near-zero `sin(theta0)`.
    ///
    /// `alpha` is unconstrained: values outside `[0, 1]` extrapolate along
    /// the great circle.
    pub fn slerp(&self, other: Self, alpha: f64) -> Self {
        let q1 = other.normalize();
        let mut q0 = self.normalize();
        let mut dot = q0.dot(q1);
        if dot < 0.0 {
            q0 = -q0;
            dot = -dot;
        }

        if dot >= 1.0 {
            return (q0 * (1.0 - alpha) + q1 * alpha).normalize();
        }

        let theta0 = dot.acos();
        let sin_theta0 = theta0.sin();
        let scale0 = ((1.0 - alpha) * theta0).sin() / sin_theta0;
        let scale1 = (alpha * theta0).sin() / sin_theta0;
        q0 * scale0 + q1 * scale1
    }

    /// Slerp from the identity toward `self`, avoiding the construction and
    /// normalization of an explicit identity operand.
    ///
    /// Same shortest-path and near-coincidence policies as
    /// [`Quaternion::slerp`].
    pub fn identity_slerp(&self, alpha: f64) -> Self {
        let q1 = self.normalize();
        // dot(identity, q1) is just q1.w; the sign flip lands on the
        // implicit identity endpoint, which is its own negation target.
        let (q1, dot) = if q1.w < 0.0 { (-q1, -q1.w) } else { (q1, q1.w) };

        if dot >= 1.0 {
            return (Self::IDENTITY * (1.0 - alpha) + q1 * alpha).normalize();
        }

        let theta0 = dot.acos();
        let sin_theta0 = theta0.sin();
        let scale0 = ((1.0 - alpha) * theta0).sin() / sin_theta0;
        let scale1 = (alpha * theta0).sin() / sin_theta0;
        Self {
            x: q1.x * scale1,
            y: q1.y * scale1,
            z: q1.z * scale1,
            w: scale0 + q1.w * scale1,
        }
    }

    /// Returns a reusable function of `alpha` that slerps between the fixed
    /// endpoints `self` and `other`.
    ///
    /// The endpoint normalization, sign resolution, and `theta0` /
    /// `sin(theta0)` terms are computed once; evaluating the returned
    /// closure is behaviorally identical to calling [`Quaternion::slerp`]
    /// with the same endpoints.
    pub fn slerp_function(&self, other: Self) -> impl Fn(f64) -> Quaternion {
        let q1 = other.normalize();
        let mut q0 = self.normalize();
        let mut dot = q0.dot(q1);
        if dot < 0.0 {
            q0 = -q0;
            dot = -dot;
        }
        let coincident = dot >= 1.0;
        let theta0 = if coincident { 0.0 } else { dot.acos() };
        let sin_theta0 = theta0.sin();

        move |alpha: f64| {
            if coincident {
                (q0 * (1.0 - alpha) + q1 * alpha).normalize()
            } else {
                let scale0 = ((1.0 - alpha) * theta0).sin() / sin_theta0;
                let scale1 = (alpha * theta0).sin() / sin_theta0;
                q0 * scale0 + q1 * scale1
            }
        }
    }

    /// Produces `n` evenly spaced interpolated quaternions between `self`
    /// and `other`, at `alpha = k / (n + 1)` for `k = 1..=n`.
    ///
    /// With `include_endpoints`, `self` is prepended and `other` appended,
    /// yielding `n + 2` entries. The sequence is materialized eagerly.
    pub fn intermediates(&self, other: Self, n: usize, include_endpoints: bool) -> Vec<Self> {
        let slerp = self.slerp_function(other);
        let mut out = Vec::with_capacity(if include_endpoints { n + 2 } else { n });
        if include_endpoints {
            out.push(*self);
        }
        let step = 1.0 / (n as f64 + 1.0);
        for k in 1..=n {
            out.push(slerp(k as f64 * step));
        }
        if include_endpoints {
            out.push(other);
        }
        out
    }

    /// The instantaneous angular derivative of `self` under the angular
    /// velocity `rate`: `0.5 * self * (rate, 0)`.
    #[inline]
    pub fn derivative(&self, rate: Vec3) -> Self {
        *self * Self::from_vector(rate) * 0.5
    }

    /// Closed-form integration of a constant angular rate over `timestep`.
    ///
    /// `self` is normalized, `rate * timestep` is converted into an
    /// axis-angle rotation, and the result is left-multiplied onto `self`.
    /// If the rotation magnitude is exactly zero, `self` is returned
    /// unchanged.
    pub fn integrate(&self, rate: Vec3, timestep: f64) -> Self {
        let delta = rate * timestep;
        let theta = delta.length();
        if theta == 0.0 {
            return *self;
        }
        let rotation = Self::from_axis_angle_fast(delta / theta, theta);
        rotation * self.normalize()
    }

    /// Returns `true` if the symmetrized geodesic distance between the two
    /// rotations is below `epsilon`. This is the rotation-semantic
    /// counterpart to exact component equality: it treats `q` and `-q` as
    /// equal.
    #[inline]
    pub fn approx_eq_eps(&self, other: Self, epsilon: f64) -> bool {
        self.distance_sym(other) < epsilon
    }

    /// [`Quaternion::approx_eq_eps`] with the default [`EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    #[test]
    fn test_slerp_endpoints() {
        let q0 = Quaternion::from_axis_angle(Vec3::Y, 0.3);
        let q1 = Quaternion::from_axis_angle(Vec3::Z, 1.4);
        assert!(q0.slerp(q1, 0.0).approx_eq(q0));
        assert!(q0.slerp(q1, 1.0).approx_eq(q1));
    }

    #[test]
    fn test_slerp_midpoint() {
        let q0 = Quaternion::IDENTITY;
        let q1 = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let mid = q0.slerp(q1, 0.5);
        let expected = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2 * 0.5);
        assert!(mid.approx_eq(expected));
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_slerp_shortest_path() {
        let q0 = Quaternion::from_axis_angle(Vec3::Y, -30.0_f64.to_radians());
        let q1 = Quaternion::from_axis_angle(Vec3::Y, 170.0_f64.to_radians());
        assert!(q0.dot(q1) < 0.0);

        let mid = q0.slerp(q1, 0.5);
        let expected = Quaternion::from_axis_angle(Vec3::Y, -110.0_f64.to_radians());
        assert!(mid.approx_eq(expected));
    }

    #[test]
    fn test_slerp_coincident_endpoints() {
        let q = Quaternion::from_axis_angle(Vec3::X, 0.8);
        for alpha in [0.0, 0.25, 0.5, 1.0, 2.0] {
            assert!(q.slerp(q, alpha).approx_eq(q));
        }
    }

    #[test]
    fn test_slerp_normalizes_inputs() {
        let q0 = Quaternion::from_axis_angle(Vec3::Y, 0.4) * 3.0;
        let q1 = Quaternion::from_axis_angle(Vec3::Y, 1.0) * 0.2;
        let mid = q0.slerp(q1, 0.5);
        assert!(mid.approx_eq(Quaternion::from_axis_angle(Vec3::Y, 0.7)));
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_slerp_extrapolates() {
        let q0 = Quaternion::IDENTITY;
        let q1 = Quaternion::from_axis_angle(Vec3::Z, 0.5);
        let beyond = q0.slerp(q1, 2.0);
        assert!(beyond.approx_eq(Quaternion::from_axis_angle(Vec3::Z, 1.0)));
        let before = q0.slerp(q1, -1.0);
        assert!(before.approx_eq(Quaternion::from_axis_angle(Vec3::Z, -0.5)));
    }

    #[test]
    fn test_identity_slerp_matches_slerp() {
        let q1 = Quaternion::from_axis_angle(Vec3::new(1.0, 0.5, -0.2), 2.2);
        for alpha in [0.0, 0.3, 0.5, 0.9, 1.0] {
            let expected = Quaternion::IDENTITY.slerp(q1, alpha);
            assert!(q1.identity_slerp(alpha).approx_eq(expected));
        }
        // Negative-w input takes the short way round.
        let q_neg = -q1;
        for alpha in [0.25, 0.75] {
            let expected = Quaternion::IDENTITY.slerp(q_neg, alpha);
            assert!(q_neg.identity_slerp(alpha).approx_eq(expected));
        }
    }

    #[test]
    fn test_slerp_function_matches_slerp() {
        let q0 = Quaternion::from_axis_angle(Vec3::X, 0.3);
        let q1 = Quaternion::from_axis_angle(Vec3::Y, -1.1);
        let f = q0.slerp_function(q1);
        for alpha in [-0.5, 0.0, 0.2, 0.5, 1.0, 1.5] {
            assert!(f(alpha).approx_eq(q0.slerp(q1, alpha)));
        }
    }

    #[test]
    fn test_intermediates_spacing() {
        let q1 = Quaternion::from_axis_angle(Vec3::Y, 1.0);
        let seq = Quaternion::IDENTITY.intermediates(q1, 3, false);
        assert_eq!(seq.len(), 3);
        for (i, q) in seq.iter().enumerate() {
            let alpha = (i as f64 + 1.0) / 4.0;
            assert!(q.approx_eq(Quaternion::from_axis_angle(Vec3::Y, alpha)));
        }
    }

    #[test]
    fn test_intermediates_with_endpoints() {
        let q0 = Quaternion::from_axis_angle(Vec3::X, 0.2);
        let q1 = Quaternion::from_axis_angle(Vec3::X, 1.2);
        let seq = q0.intermediates(q1, 2, true);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[0], q0);
        assert_eq!(seq[3], q1);
    }

    #[test]
    fn test_derivative() {
        let q = Quaternion::IDENTITY;
        let rate = Vec3::new(0.0, 2.0, 0.0);
        let dq = q.derivative(rate);
        assert_relative_eq!(dq.y, 1.0);
        assert_relative_eq!(dq.w, 0.0);
    }

    #[test]
    fn test_integrate_constant_rate() {
        let q = Quaternion::IDENTITY;
        let rate = Vec3::new(0.0, PI, 0.0);
        let rotated = q.integrate(rate, 0.5);
        assert!(rotated.approx_eq(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2)));

        // Zero rotation returns the input unchanged, without normalizing.
        let non_unit = Quaternion::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(non_unit.integrate(Vec3::ZERO, 1.0), non_unit);
    }

    #[test]
    fn test_integrate_matches_euler_step_for_small_dt() {
        // Closed-form integration agrees with a first-order world-frame
        // Euler step q + 0.5 * (rate, 0) * q * dt for small timesteps.
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, 0.8, -0.1), 0.9);
        let rate = Vec3::new(0.2, -0.1, 0.4);
        let dt = 1e-6;
        let integrated = q.integrate(rate, dt);
        let stepped = (q + Quaternion::from_vector(rate) * q * (0.5 * dt)).normalize();
        assert!(integrated.approx_eq_eps(stepped, 1e-9));
    }

    #[test]
    fn test_approx_eq_resolves_double_cover() {
        let q = Quaternion::from_axis_angle(Vec3::Z, 1.7);
        assert!(q.approx_eq(-q));
        assert!(!q.approx_eq(Quaternion::from_axis_angle(Vec3::Z, 1.8)));
        assert!(q.approx_eq_eps(Quaternion::from_axis_angle(Vec3::Z, 1.8), 0.2));
    }
}
