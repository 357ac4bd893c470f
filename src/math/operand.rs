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

//! Dynamic operand dispatch for the polymorphic operators.
//!
//! The `std::ops` impls on [`Quaternion`] cover the statically-typed
//! operand pairs. When operand kinds are only known at runtime (scripting
//! layers, data-driven pipelines), this module provides the same closed
//! operation set over a tagged [`Operand`] value, routing every unsupported
//! kind pair to [`MathError::InvalidOperand`] with both kinds named.

use crate::error::MathError;
use crate::math::{Quaternion, RigidTransform, Vec3};

/// A runtime-tagged operand for [`try_mul`] and [`try_div`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A scalar value.
    Scalar(f64),
    /// A quaternion.
    Quaternion(Quaternion),
    /// A 3D vector.
    Vector(Vec3),
    /// A rigid transform.
    Transform(RigidTransform),
}

impl Operand {
    /// The name of this operand's kind, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Scalar",
            Operand::Quaternion(_) => "Quaternion",
            Operand::Vector(_) => "Vector",
            Operand::Transform(_) => "Transform",
        }
    }
}

/// Multiplies two runtime-tagged operands.
///
/// Supported pairs: quaternion x quaternion (Hamilton product), scalar x
/// quaternion and quaternion x scalar (component scaling), quaternion x
/// vector (rotation), and quaternion x transform (composition). Any other
/// pair is an [`MathError::InvalidOperand`].
pub fn try_mul(lhs: Operand, rhs: Operand) -> Result<Operand, MathError> {
    match (lhs, rhs) {
        (Operand::Quaternion(q0), Operand::Quaternion(q1)) => Ok(Operand::Quaternion(q0 * q1)),
        (Operand::Scalar(s), Operand::Quaternion(q)) => Ok(Operand::Quaternion(s * q)),
        (Operand::Quaternion(q), Operand::Scalar(s)) => Ok(Operand::Quaternion(q * s)),
        (Operand::Quaternion(q), Operand::Vector(v)) => Ok(Operand::Vector(q * v)),
        (Operand::Quaternion(q), Operand::Transform(t)) => Ok(Operand::Transform(q * t)),
        (lhs, rhs) => Err(MathError::InvalidOperand {
            op: "Mul",
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }),
    }
}

/// Divides two runtime-tagged operands.
///
/// Supported pairs: quaternion / scalar (component scaling), scalar /
/// quaternion (the scalar divided by each component), and quaternion /
/// quaternion (multiplication by the inverse). Any other pair is an
/// [`MathError::InvalidOperand`].
pub fn try_div(lhs: Operand, rhs: Operand) -> Result<Operand, MathError> {
    match (lhs, rhs) {
        (Operand::Quaternion(q), Operand::Scalar(s)) => Ok(Operand::Quaternion(q / s)),
        (Operand::Scalar(s), Operand::Quaternion(q)) => Ok(Operand::Quaternion(s / q)),
        (Operand::Quaternion(q0), Operand::Quaternion(q1)) => Ok(Operand::Quaternion(q0 / q1)),
        (lhs, rhs) => Err(MathError::InvalidOperand {
            op: "Div",
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAC_PI_2;

    #[test]
    fn test_supported_mul_pairs() {
        let q = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);

        let out = try_mul(Operand::Quaternion(q), Operand::Quaternion(q.inverse())).unwrap();
        match out {
            Operand::Quaternion(r) => assert!(r.approx_eq(Quaternion::IDENTITY)),
            other => panic!("expected quaternion, got {other:?}"),
        }

        assert_eq!(
            try_mul(Operand::Scalar(2.0), Operand::Quaternion(q)).unwrap(),
            try_mul(Operand::Quaternion(q), Operand::Scalar(2.0)).unwrap()
        );

        let rotated = try_mul(Operand::Quaternion(q), Operand::Vector(Vec3::X)).unwrap();
        match rotated {
            Operand::Vector(v) => assert!((v.z - (-1.0)).abs() < 1e-9),
            other => panic!("expected vector, got {other:?}"),
        }

        let t = try_mul(
            Operand::Quaternion(q),
            Operand::Transform(RigidTransform::IDENTITY),
        )
        .unwrap();
        assert!(matches!(t, Operand::Transform(_)));
    }

    #[test]
    fn test_unsupported_mul_pairs_report_kinds() {
        let err = try_mul(Operand::Vector(Vec3::X), Operand::Quaternion(Quaternion::IDENTITY))
            .unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidOperand {
                op: "Mul",
                lhs: "Vector",
                rhs: "Quaternion",
            }
        );

        assert!(try_mul(Operand::Scalar(1.0), Operand::Scalar(2.0)).is_err());
        assert!(try_mul(
            Operand::Transform(RigidTransform::IDENTITY),
            Operand::Quaternion(Quaternion::IDENTITY)
        )
        .is_err());
    }

    #[test]
    fn test_supported_div_pairs() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        let halved = try_div(Operand::Quaternion(q), Operand::Scalar(2.0)).unwrap();
        assert_eq!(halved, Operand::Quaternion(q / 2.0));

        let recip = try_div(Operand::Scalar(12.0), Operand::Quaternion(q)).unwrap();
        assert_eq!(recip, Operand::Quaternion(12.0 / q));

        let ratio = try_div(Operand::Quaternion(q), Operand::Quaternion(q)).unwrap();
        match ratio {
            Operand::Quaternion(r) => assert!(r.approx_eq(Quaternion::IDENTITY)),
            other => panic!("expected quaternion, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_div_pairs_report_kinds() {
        let err = try_div(
            Operand::Quaternion(Quaternion::IDENTITY),
            Operand::Vector(Vec3::X),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidOperand {
                op: "Div",
                lhs: "Quaternion",
                rhs: "Vector",
            }
        );
    }
}
