//! Normalization that refuses non-finite input instead of returning NaN.

use tracing::debug;

use crate::error::{Error, Result};
use crate::math::Radian;
use crate::normalize::normalize;

/// Like [`normalize`], but fails on a non-finite `angle` or `center`.
///
/// The angle is validated first. A successful result is bit-identical to
/// the unchecked one.
pub fn try_normalize<T: Radian>(angle: T, center: T) -> Result<T> {
  validate(angle, center)?;
  Ok(normalize(angle, center))
}

pub(crate) fn validate<T: Radian>(angle: T, center: T) -> Result<()> {
  if !angle.is_finite() {
    debug!(angle = angle.to_f64(), "refusing to normalize non-finite angle");
    return Err(Error::NonFiniteAngle(angle.to_f64()));
  }
  if !center.is_finite() {
    debug!(center = center.to_f64(), "refusing to normalize around non-finite center");
    return Err(Error::NonFiniteCenter(center.to_f64()));
  }
  Ok(())
}

pub fn try_normalize_between_minus_pi_and_pi<T: Radian>(angle: T) -> Result<T> {
  try_normalize(angle, T::ZERO)
}

pub fn try_normalize_between_zero_and_two_pi<T: Radian>(angle: T) -> Result<T> {
  try_normalize(angle, T::PI)
}
