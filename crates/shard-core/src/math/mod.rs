// Copyright 2025 eraflo
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

//! Provides the small set of math primitives the scene core needs.

pub mod color;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::vector::Vec3;

/// Clamps `value` into `[0.0, 1.0]`, mapping `NaN` to `0.0`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_clamps_both_ends() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.25), 0.25);
        assert_eq!(saturate(7.0), 1.0);
    }

    #[test]
    fn test_saturate_nan_is_zero() {
        assert_eq!(saturate(f32::NAN), 0.0);
    }
}
