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

//! Error types raised by the algebraic operators.
//!
//! Only programmer errors are represented here: an operator handed an
//! operand-kind combination outside its defined domain. Numerical
//! degeneracies (zero-length normalization, zero-magnitude logarithm,
//! near-zero sine terms) are never errors; each has an explicit, documented
//! fallback value that keeps the operation total over its real-valued
//! domain.
//!
//! Mutation of a quaternion component after construction is ruled out at
//! compile time rather than at runtime: [`crate::Quaternion`] is a `Copy`
//! value type with no interior mutability, so no error variant exists for
//! writes to an existing value.

use std::fmt;

/// An error produced by the dynamic operator dispatch surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An algebraic operator was given an operand-kind combination outside
    /// its defined domain.
    InvalidOperand {
        /// The operator that was attempted (`"Mul"` or `"Div"`).
        op: &'static str,
        /// The kind of the left-hand operand.
        lhs: &'static str,
        /// The kind of the right-hand operand.
        rhs: &'static str,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidOperand { op, lhs, rhs } => {
                write!(f, "Invalid operand kinds for {op}: {lhs} and {rhs}")
            }
        }
    }
}

impl std::error::Error for MathError {}
