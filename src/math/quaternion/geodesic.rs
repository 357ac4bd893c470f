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

//! Exponential/logarithmic maps and geodesic distances on the rotation
//! manifold.

use super::Quaternion;

impl Quaternion {
    /// Computes the quaternion exponential.
    ///
    /// For `q = (v, w)` the result is `e^w * (cos|v| + (v/|v|) sin|v|)`.
    /// When `|v|` is exactly zero the result is `(0, 0, 0, e^w)`, avoiding a
    /// division by zero.
    pub fn exp(&self) -> Self {
        let v = self.vector();
        let v_len = v.length();
        let e_w = self.w.exp();
        if v_len == 0.0 {
            return Self::from_real(e_w);
        }
        let s = e_w * v_len.sin() / v_len;
        Self {
            x: v.x * s,
            y: v.y * s,
            z: v.z * s,
            w: e_w * v_len.cos(),
        }
    }

    /// Computes the quaternion logarithm, the inverse of [`Quaternion::exp`].
    ///
    /// Degenerate cases: a zero-magnitude quaternion yields
    /// `(0, 0, 0, -inf)` (the logarithm of zero by convention); a pure-real
    /// quaternion with nonzero magnitude yields `(0, 0, 0, ln magnitude)`.
    pub fn ln(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::from_real(f64::NEG_INFINITY);
        }
        let v = self.vector();
        let v_len = v.length();
        if v_len == 0.0 {
            return Self::from_real(mag.ln());
        }
        let s = (self.w / mag).acos() / v_len;
        Self {
            x: v.x * s,
            y: v.y * s,
            z: v.z * s,
            w: mag.ln(),
        }
    }

    /// The manifold exponential map anchored at `self`:
    /// `self * exp(tangent)`.
    #[inline]
    pub fn exp_map(&self, tangent: Self) -> Self {
        *self * tangent.exp()
    }

    /// The manifold logarithmic map anchored at `self`:
    /// `ln(inverse(self) * arg)`.
    #[inline]
    pub fn ln_map(&self, arg: Self) -> Self {
        (self.inverse() * arg).ln()
    }

    /// Symmetrized exponential map: conjugates by `self^0.5` instead of
    /// left-multiplying, so that swapping the base and the result maps one
    /// tangent to the other.
    pub fn exp_map_sym(&self, tangent: Self) -> Self {
        let half = self.powf(0.5);
        half * tangent.exp() * half
    }

    /// Symmetrized logarithmic map, the inverse of
    /// [`Quaternion::exp_map_sym`]: conjugates by `self^-0.5`.
    pub fn ln_map_sym(&self, arg: Self) -> Self {
        let half_inv = self.powf(-0.5);
        (half_inv * arg * half_inv).ln()
    }

    /// The minimal relative rotation from `self` to `other` under the
    /// double cover: flips `self`'s sign when `dot(self, other) < 0`, then
    /// returns `inverse(self) * other`. Consequently
    /// `self * self.difference(other)` equals `other` up to sign.
    pub fn difference(&self, other: Self) -> Self {
        let q0 = if self.dot(other) < 0.0 { -*self } else { *self };
        q0.inverse() * other
    }

    /// The angular-velocity-style relative logarithm
    /// `ln(self * inverse(other))`. No sign-ambiguity resolution is applied.
    #[inline]
    pub fn ln_inv(&self, other: Self) -> Self {
        (*self * other.inverse()).ln()
    }

    /// Geodesic distance `2 * |ln_map(self, other)|`.
    ///
    /// Range `[0, 2π]` for unit inputs. The double-cover sign ambiguity is
    /// NOT resolved: `q` and `-q` are at distance `2π` from each other. Use
    /// [`Quaternion::distance_sym`] for a rotation-semantic distance.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        2.0 * self.ln_map(other).magnitude()
    }

    /// Symmetrized geodesic distance `2 * |ln(difference(self, other))|`.
    ///
    /// Range `[0, π]` for unit inputs; resolves the double cover, so
    /// `q` and `-q` are at distance zero.
    #[inline]
    pub fn distance_sym(&self, other: Self) -> f64 {
        2.0 * self.difference(other).ln().magnitude()
    }

    /// Chord length of the shortest arc, `2 * sin(distance_sym / 2)`.
    #[inline]
    pub fn distance_chord(&self, other: Self) -> f64 {
        2.0 * (self.distance_sym(other) / 2.0).sin()
    }

    /// Cheap Euclidean distance accounting for the sign ambiguity without
    /// trigonometry: `min(|q0 - q1|, |q0 + q1|)`.
    #[inline]
    pub fn distance_abs(&self, other: Self) -> f64 {
        (*self - other).magnitude().min((*self + other).magnitude())
    }
}
