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

//! # Versor
//!
//! A library for representing and manipulating 3D rotations as unit
//! quaternions, aimed at games, simulations, and robotics.
//!
//! The core of the crate is the [`Quaternion`] value type and its full
//! algebraic and geometric operation set: the Hamilton product and related
//! algebra, exponential/logarithmic maps and geodesic distances, spherical
//! linear interpolation, and conversions to and from axis-angle form,
//! rotation matrices, and Euler angles in six rotation orders.
//!
//! Every operation is a pure function of its inputs producing a new
//! immutable value. Quaternions are never normalized implicitly at
//! construction; operations that require unit length (rotation of vectors,
//! slerp, axis-angle extraction) normalize on demand internally and say so
//! in their documentation.

#![warn(missing_docs)]

pub mod error;
pub mod math;

pub use error::MathError;
pub use math::operand::Operand;
pub use math::quaternion::{EulerOrder, Quaternion};
pub use math::spring::Spring;
pub use math::transform::RigidTransform;
pub use math::vector::Vec3;
pub use math::EPSILON;
