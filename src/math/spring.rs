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

//! Damped-spring smoothing for scalar and vector values.
//!
//! [`Spring`] integrates the damped harmonic oscillator
//! `x'' = -speed^2 * (x - target) - 2 * damper * speed * x'` with the exact
//! closed-form solution rather than a numeric step, so the update is stable
//! for any time step and any stiffness.

use std::ops::{Add, Mul, Sub};

use crate::math::Vec3;

/// A value that can be driven by a [`Spring`]: closed under addition,
/// subtraction, and scaling by a scalar.
pub trait SpringValue:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    /// The additive identity, used as the initial velocity.
    const ZERO: Self;
}

impl SpringValue for f64 {
    const ZERO: Self = 0.0;
}

impl SpringValue for Vec3 {
    const ZERO: Self = Vec3::ZERO;
}

/// A damped spring tracking a moving target.
///
/// `speed` is the undamped angular frequency in radians per second; higher
/// values converge faster. `damper` is the damping ratio: `1.0` is critical
/// damping (fastest convergence with no overshoot), values below `1.0`
/// oscillate, values above are sluggish. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring<T: SpringValue> {
    /// The value the spring is pulled toward.
    pub target: T,
    /// The current value.
    pub position: T,
    /// The current rate of change.
    pub velocity: T,
    /// Damping ratio (1.0 = critical).
    pub damper: f64,
    /// Undamped angular frequency in radians per second.
    pub speed: f64,
}

impl<T: SpringValue> Spring<T> {
    /// Creates a critically-damped spring at rest on `initial`, targeting
    /// `initial`, with the given speed.
    pub fn new(initial: T, speed: f64) -> Self {
        Self {
            target: initial,
            position: initial,
            velocity: T::ZERO,
            damper: 1.0,
            speed,
        }
    }

    /// Advances the spring by `dt` seconds and returns the new position.
    ///
    /// Uses the exact solution of the damped oscillator, so stepping by
    /// `dt` once is identical to stepping by `dt / n` a total of `n` times.
    /// A zero or negative `dt` leaves the spring unchanged.
    pub fn update(&mut self, dt: f64) -> T {
        if dt <= 0.0 {
            return self.position;
        }
        let p0 = self.position - self.target;
        let v0 = self.velocity;
        let s = self.speed;
        let d = self.damper;

        if d >= 1.0 {
            // Critically damped (or treated as such): no oscillatory part.
            let decay = (-s * dt).exp();
            let coeff = v0 + p0 * s;
            self.position = self.target + (p0 + coeff * dt) * decay;
            self.velocity = (v0 - coeff * (s * dt)) * decay;
        } else {
            // Underdamped: damped frequency s * sqrt(1 - d^2).
            let root = (1.0 - d * d).sqrt();
            let omega = s * root;
            let decay = (-d * s * dt).exp();
            let (sin, cos) = (omega * dt).sin_cos();
            let alpha = (v0 + p0 * (d * s)) * (1.0 / omega);
            self.position = self.target + (p0 * cos + alpha * sin) * decay;
            self.velocity = (v0 * cos - (p0 * s + v0 * d) * (sin / root)) * decay;
        }
        self.position
    }

    /// Adds an instantaneous velocity kick without moving the position.
    pub fn impulse(&mut self, velocity: T) {
        self.velocity = self.velocity + velocity;
    }

    /// Teleports the spring: snaps the position and zeroes the velocity.
    pub fn reset(&mut self, position: T) {
        self.target = position;
        self.position = position;
        self.velocity = T::ZERO;
    }
}
