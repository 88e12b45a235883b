//! Reduction of angles into a window of width 2π.
//!
//! Every operation here funnels into [`normalize`], so all ranges share the
//! same rounding at their boundaries.

use crate::checked;
use crate::error::Result;
use crate::math::Radian;

/// Reduces `angle` into `[center - π, center + π)`.
///
/// The result differs from `angle` by an integer multiple of 2π. That
/// multiple is found from the offset to `center` and then subtracted from the
/// original `angle`, so the only rounding in the result is that of a single
/// subtraction. An angle already inside the window is returned as is.
///
/// A point exactly half a turn away from `center` lands on the lower bound:
/// `center + π` maps to `center - π`.
///
/// NaN or an infinite value in either argument yields NaN.
///
/// ```
/// use plane_angle::{normalize, PI, TWO_PI};
///
/// assert_eq!(normalize(PI, 0f64), -PI);
/// assert_eq!(normalize(1.5, 10f64), 1.5 + TWO_PI);
/// ```
#[inline]
pub fn normalize<T: Radian>(angle: T, center: T) -> T {
  reduce(angle, center, center - T::PI, center + T::PI)
}

#[inline]
fn reduce<T: Radian>(angle: T, center: T, lower: T, upper: T) -> T {
  if !center.is_finite() {
    return T::NAN;
  }
  if lower <= angle && angle < upper {
    return angle;
  }

  let k = ((angle - center) / T::TWO_PI + T::HALF).floor();
  let reduced = angle - k * T::TWO_PI;

  // `k` can be off by one when the quotient rounds onto an integer.
  if reduced < lower {
    let up = reduced + T::TWO_PI;
    if lower <= up && up < upper {
      up
    } else {
      lower
    }
  } else if reduced >= upper {
    let down = reduced - T::TWO_PI;
    if lower <= down && down < upper {
      down
    } else {
      lower
    }
  } else {
    reduced
  }
}

/// Reduces `angle` into `[-π, π)`.
#[inline]
pub fn normalize_between_minus_pi_and_pi<T: Radian>(angle: T) -> T {
  normalize(angle, T::ZERO)
}

/// Reduces `angle` into `[0, 2π)`.
#[inline]
pub fn normalize_between_zero_and_two_pi<T: Radian>(angle: T) -> T {
  normalize(angle, T::PI)
}

/// A fixed 2π-wide target range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer<T> {
  center: T,
  lower: T,
  upper: T,
}

impl<T: Radian> Normalizer<T> {
  pub fn centered_at(center: T) -> Self {
    Self {
      center,
      lower: center - T::PI,
      upper: center + T::PI,
    }
  }

  /// Range `[lower, lower + 2π)`, with `lower` kept exactly.
  pub fn starting_at(lower: T) -> Self {
    Self {
      center: lower + T::PI,
      lower,
      upper: lower + T::TWO_PI,
    }
  }

  pub fn minus_pi_to_pi() -> Self {
    Self::centered_at(T::ZERO)
  }

  pub fn zero_to_two_pi() -> Self {
    Self::centered_at(T::PI)
  }

  pub fn center(&self) -> T {
    self.center
  }

  pub fn lower_bound(&self) -> T {
    self.lower
  }

  pub fn upper_bound(&self) -> T {
    self.upper
  }

  #[inline]
  pub fn apply(&self, angle: T) -> T {
    reduce(angle, self.center, self.lower, self.upper)
  }

  pub fn try_apply(&self, angle: T) -> Result<T> {
    checked::validate(angle, self.center)?;
    Ok(self.apply(angle))
  }
}
