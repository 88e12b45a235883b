use core::ops::{Add, Div, Mul, Sub};

pub const PI: f64 = core::f64::consts::PI;
pub const TWO_PI: f64 = 2f64 * PI;

mod private {
  pub trait Sealed {}
  impl Sealed for f32 {}
  impl Sealed for f64 {}
}

/// Implemented for `f64` and `f32` only.
pub trait Radian:
  Copy
  + PartialOrd
  + Add<Output = Self>
  + Sub<Output = Self>
  + Mul<Output = Self>
  + Div<Output = Self>
  + private::Sealed
{
  const ZERO: Self;
  const HALF: Self;
  const NAN: Self;
  const PI: Self;
  /// Exactly `2 * PI` at this precision.
  const TWO_PI: Self;

  fn floor(self) -> Self;
  fn is_finite(self) -> bool;
  fn to_f64(self) -> f64;
}

impl Radian for f64 {
  const ZERO: Self = 0f64;
  const HALF: Self = 0.5;
  const NAN: Self = f64::NAN;
  const PI: Self = PI;
  const TWO_PI: Self = TWO_PI;

  #[inline]
  fn floor(self) -> Self {
    libm::floor(self)
  }

  #[inline]
  fn is_finite(self) -> bool {
    f64::is_finite(self)
  }

  #[inline]
  fn to_f64(self) -> f64 {
    self
  }
}

impl Radian for f32 {
  const ZERO: Self = 0f32;
  const HALF: Self = 0.5;
  const NAN: Self = f32::NAN;
  const PI: Self = core::f32::consts::PI;
  const TWO_PI: Self = 2f32 * core::f32::consts::PI;

  #[inline]
  fn floor(self) -> Self {
    libm::floorf(self)
  }

  #[inline]
  fn is_finite(self) -> bool {
    f32::is_finite(self)
  }

  #[inline]
  fn to_f64(self) -> f64 {
    self as f64
  }
}
