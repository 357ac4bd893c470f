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

//! Euler-angle conversions in six rotation orders.
//!
//! Each order pairs a composition function with its own closed-form
//! extraction. The extractions are intentionally kept as six independent
//! routines rather than one parameterized one: each has a distinct
//! singularity test value, sign convention, and gimbal-lock recombination
//! formula, and unifying them invites subtle sign errors.
//!
//! An extraction hits its singularity branch when the middle rotation is
//! within a hair of +/-90 degrees (the test value crosses the near-0.5
//! threshold); the third rotation is then forced to zero and the first is
//! recombined from a two-argument arctangent of the raw components.

use serde::{Deserialize, Serialize};

use super::Quaternion;
use crate::math::{Vec3, FRAC_PI_2};

/// The order in which per-axis rotations are composed.
///
/// `Xyz` composes a rotation about X, then Y, then Z (so the X rotation is
/// applied first in the fixed frame reading right to left).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EulerOrder {
    /// Rotate about X, then Y, then Z. The default order.
    #[default]
    Xyz,
    /// Rotate about X, then Z, then Y.
    Xzy,
    /// Rotate about Y, then X, then Z.
    Yxz,
    /// Rotate about Y, then Z, then X.
    Yzx,
    /// Rotate about Z, then X, then Y.
    Zxy,
    /// Rotate about Z, then Y, then X.
    Zyx,
}

impl Quaternion {
    /// Creates a quaternion from Euler angles (radians) in the given order.
    pub fn from_euler_angles(rx: f64, ry: f64, rz: f64, order: EulerOrder) -> Self {
        match order {
            EulerOrder::Xyz => Self::from_euler_angles_xyz(rx, ry, rz),
            EulerOrder::Xzy => Self::from_euler_angles_xzy(rx, ry, rz),
            EulerOrder::Yxz => Self::from_euler_angles_yxz(rx, ry, rz),
            EulerOrder::Yzx => Self::from_euler_angles_yzx(rx, ry, rz),
            EulerOrder::Zxy => Self::from_euler_angles_zxy(rx, ry, rz),
            EulerOrder::Zyx => Self::from_euler_angles_zyx(rx, ry, rz),
        }
    }

    /// Extracts Euler angles (radians) in the given order.
    pub fn to_euler_angles(&self, order: EulerOrder) -> (f64, f64, f64) {
        match order {
            EulerOrder::Xyz => self.to_euler_angles_xyz(),
            EulerOrder::Xzy => self.to_euler_angles_xzy(),
            EulerOrder::Yxz => self.to_euler_angles_yxz(),
            EulerOrder::Yzx => self.to_euler_angles_yzx(),
            EulerOrder::Zxy => self.to_euler_angles_zxy(),
            EulerOrder::Zyx => self.to_euler_angles_zyx(),
        }
    }

    /// Composes per-axis rotations in XYZ order.
    pub fn from_euler_angles_xyz(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::X, rx)
            * Self::from_axis_angle_fast(Vec3::Y, ry)
            * Self::from_axis_angle_fast(Vec3::Z, rz)
    }

    /// Composes per-axis rotations in XZY order.
    pub fn from_euler_angles_xzy(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::X, rx)
            * Self::from_axis_angle_fast(Vec3::Z, rz)
            * Self::from_axis_angle_fast(Vec3::Y, ry)
    }

    /// Composes per-axis rotations in YXZ order.
    pub fn from_euler_angles_yxz(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::Y, ry)
            * Self::from_axis_angle_fast(Vec3::X, rx)
            * Self::from_axis_angle_fast(Vec3::Z, rz)
    }

    /// Composes per-axis rotations in YZX order.
    pub fn from_euler_angles_yzx(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::Y, ry)
            * Self::from_axis_angle_fast(Vec3::Z, rz)
            * Self::from_axis_angle_fast(Vec3::X, rx)
    }

    /// Composes per-axis rotations in ZXY order.
    pub fn from_euler_angles_zxy(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::Z, rz)
            * Self::from_axis_angle_fast(Vec3::X, rx)
            * Self::from_axis_angle_fast(Vec3::Y, ry)
    }

    /// Composes per-axis rotations in ZYX order.
    pub fn from_euler_angles_zyx(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_axis_angle_fast(Vec3::Z, rz)
            * Self::from_axis_angle_fast(Vec3::Y, ry)
            * Self::from_axis_angle_fast(Vec3::X, rx)
    }

    /// Extracts XYZ-order Euler angles. The middle (Y) rotation is
    /// singular at +/-90 degrees; there the Z rotation is forced to zero.
    pub fn to_euler_angles_xyz(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = x * z + y * w;
        if test > 0.499999 {
            let rx = (2.0 * (x * y + z * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            (rx, FRAC_PI_2, 0.0)
        } else if test < -0.499999 {
            let rx = -(2.0 * (x * y + z * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            (rx, -FRAC_PI_2, 0.0)
        } else {
            let rx = (2.0 * (x * w - y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
            let ry = (2.0 * test).clamp(-1.0, 1.0).asin();
            let rz = (2.0 * (z * w - x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
            (rx, ry, rz)
        }
    }

    /// Extracts XZY-order Euler angles. The middle (Z) rotation is
    /// singular at +/-90 degrees; there the Y rotation is forced to zero.
    pub fn to_euler_angles_xzy(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = z * w - x * y;
        if test > 0.499999 {
            let rx = (2.0 * (x * z - y * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            (rx, 0.0, FRAC_PI_2)
        } else if test < -0.499999 {
            let rx = -(2.0 * (x * z - y * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            (rx, 0.0, -FRAC_PI_2)
        } else {
            let rx = (2.0 * (y * z + x * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            let rz = (2.0 * test).clamp(-1.0, 1.0).asin();
            let ry = (2.0 * (x * z + y * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            (rx, ry, rz)
        }
    }

    /// Extracts YXZ-order Euler angles. The middle (X) rotation is
    /// singular at +/-90 degrees; there the Z rotation is forced to zero.
    pub fn to_euler_angles_yxz(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = x * w - y * z;
        if test > 0.499999 {
            let ry = (2.0 * (x * y - z * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            (FRAC_PI_2, ry, 0.0)
        } else if test < -0.499999 {
            let ry = -(2.0 * (x * y - z * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            (-FRAC_PI_2, ry, 0.0)
        } else {
            let ry = (2.0 * (x * z + y * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            let rx = (2.0 * test).clamp(-1.0, 1.0).asin();
            let rz = (2.0 * (x * y + z * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            (rx, ry, rz)
        }
    }

    /// Extracts YZX-order Euler angles. The middle (Z) rotation is
    /// singular at +/-90 degrees; there the X rotation is forced to zero.
    pub fn to_euler_angles_yzx(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = x * y + z * w;
        if test > 0.499999 {
            let ry = (2.0 * (y * z + x * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            (0.0, ry, FRAC_PI_2)
        } else if test < -0.499999 {
            let ry = -(2.0 * (y * z + x * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            (0.0, ry, -FRAC_PI_2)
        } else {
            let ry = (2.0 * (y * w - x * z)).atan2(1.0 - 2.0 * (y * y + z * z));
            let rz = (2.0 * test).clamp(-1.0, 1.0).asin();
            let rx = (2.0 * (x * w - y * z)).atan2(1.0 - 2.0 * (x * x + z * z));
            (rx, ry, rz)
        }
    }

    /// Extracts ZXY-order Euler angles. The middle (X) rotation is
    /// singular at +/-90 degrees; there the Y rotation is forced to zero.
    pub fn to_euler_angles_zxy(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = y * z + x * w;
        if test > 0.499999 {
            let rz = (2.0 * (x * z + y * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            (FRAC_PI_2, 0.0, rz)
        } else if test < -0.499999 {
            let rz = -(2.0 * (x * z + y * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            (-FRAC_PI_2, 0.0, rz)
        } else {
            let rz = (2.0 * (z * w - x * y)).atan2(1.0 - 2.0 * (x * x + z * z));
            let rx = (2.0 * test).clamp(-1.0, 1.0).asin();
            let ry = (2.0 * (y * w - x * z)).atan2(1.0 - 2.0 * (x * x + y * y));
            (rx, ry, rz)
        }
    }

    /// Extracts ZYX-order Euler angles. The middle (Y) rotation is
    /// singular at +/-90 degrees; there the X rotation is forced to zero.
    pub fn to_euler_angles_zyx(&self) -> (f64, f64, f64) {
        let n = self.normalize();
        let (x, y, z, w) = (n.x, n.y, n.z, n.w);
        let test = y * w - x * z;
        if test > 0.499999 {
            let rz = (2.0 * (y * z - x * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            (0.0, FRAC_PI_2, rz)
        } else if test < -0.499999 {
            let rz = -(2.0 * (y * z - x * w)).atan2(1.0 - 2.0 * (x * x + z * z));
            (0.0, -FRAC_PI_2, rz)
        } else {
            let rz = (2.0 * (x * y + z * w)).atan2(1.0 - 2.0 * (y * y + z * z));
            let ry = (2.0 * test).clamp(-1.0, 1.0).asin();
            let rx = (2.0 * (y * z + x * w)).atan2(1.0 - 2.0 * (x * x + y * y));
            (rx, ry, rz)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ORDERS: [EulerOrder; 6] = [
        EulerOrder::Xyz,
        EulerOrder::Xzy,
        EulerOrder::Yxz,
        EulerOrder::Yzx,
        EulerOrder::Zxy,
        EulerOrder::Zyx,
    ];

    #[test]
    fn test_round_trip_all_orders() {
        // Angles comfortably away from the per-order singularities.
        let (rx, ry, rz) = (0.3, -0.4, 0.5);
        for order in ORDERS {
            let q = Quaternion::from_euler_angles(rx, ry, rz, order);
            let (ox, oy, oz) = q.to_euler_angles(order);
            assert_relative_eq!(ox, rx, epsilon = 1e-9);
            assert_relative_eq!(oy, ry, epsilon = 1e-9);
            assert_relative_eq!(oz, rz, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_trip_large_outer_angles() {
        let (rx, ry, rz) = (2.8, 0.2, -2.6);
        let q = Quaternion::from_euler_angles_xyz(rx, ry, rz);
        let (ox, oy, oz) = q.to_euler_angles_xyz();
        assert_relative_eq!(ox, rx, epsilon = 1e-9);
        assert_relative_eq!(oy, ry, epsilon = 1e-9);
        assert_relative_eq!(oz, rz, epsilon = 1e-9);
    }

    #[test]
    fn test_orders_disagree_for_same_angles() {
        // The same angle triple composed in different orders yields
        // different rotations.
        let q_xyz = Quaternion::from_euler_angles_xyz(0.7, 0.4, -0.3);
        let q_zyx = Quaternion::from_euler_angles_zyx(0.7, 0.4, -0.3);
        assert!(!q_xyz.approx_eq(q_zyx));
    }

    #[test]
    fn test_default_order_is_xyz() {
        let q = Quaternion::from_euler_angles(0.2, 0.3, 0.4, EulerOrder::default());
        assert!(q.approx_eq(Quaternion::from_euler_angles_xyz(0.2, 0.3, 0.4)));
    }

    #[test]
    fn test_single_axis_angles() {
        for order in ORDERS {
            let q = Quaternion::from_euler_angles(0.6, 0.0, 0.0, order);
            assert!(q.approx_eq(Quaternion::from_axis_angle(Vec3::X, 0.6)));
            let (ox, oy, oz) = q.to_euler_angles(order);
            assert_relative_eq!(ox, 0.6, epsilon = 1e-9);
            assert_relative_eq!(oy, 0.0, epsilon = 1e-9);
            assert_relative_eq!(oz, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gimbal_lock_branch_preserves_rotation() {
        // At a +/-90-degree middle rotation the extracted angles are not
        // unique, but recomposing them must reproduce the same rotation.
        for order in ORDERS {
            for middle_sign in [1.0, -1.0] {
                let (rx, ry, rz) = match order {
                    EulerOrder::Xyz => (0.3, middle_sign * FRAC_PI_2, 0.4),
                    EulerOrder::Xzy => (0.3, 0.4, middle_sign * FRAC_PI_2),
                    EulerOrder::Yxz => (middle_sign * FRAC_PI_2, 0.3, 0.4),
                    EulerOrder::Yzx => (0.4, 0.3, middle_sign * FRAC_PI_2),
                    EulerOrder::Zxy => (middle_sign * FRAC_PI_2, 0.4, 0.3),
                    EulerOrder::Zyx => (0.4, middle_sign * FRAC_PI_2, 0.3),
                };
                let q = Quaternion::from_euler_angles(rx, ry, rz, order);
                let (ox, oy, oz) = q.to_euler_angles(order);
                let recomposed = Quaternion::from_euler_angles(ox, oy, oz, order);
                assert!(
                    recomposed.approx_eq_eps(q, 1e-6),
                    "gimbal-lock round trip failed for {order:?}"
                );
            }
        }
    }

    #[test]
    fn test_gimbal_lock_forces_third_angle_to_zero() {
        let q = Quaternion::from_euler_angles_xyz(0.3, FRAC_PI_2, 0.4);
        let (_, oy, oz) = q.to_euler_angles_xyz();
        assert_relative_eq!(oy, FRAC_PI_2);
        assert_relative_eq!(oz, 0.0);
    }

    #[test]
    fn test_extraction_normalizes_input() {
        let q = Quaternion::from_euler_angles_zxy(0.2, -0.5, 0.9) * 3.0;
        let (rx, ry, rz) = q.to_euler_angles_zxy();
        assert_relative_eq!(rx, 0.2, epsilon = 1e-9);
        assert_relative_eq!(ry, -0.5, epsilon = 1e-9);
        assert_relative_eq!(rz, 0.9, epsilon = 1e-9);
    }
}
