//! Normalization of plane angles given in radians.
//!
//! An angle is reduced into a 2π-wide window by subtracting a whole number
//! of turns, chosen so that the boundaries of the window behave the same way
//! for every input magnitude:
//!
//! - [`normalize`] reduces into `[center - π, center + π)`
//! - [`normalize_between_minus_pi_and_pi`] reduces into `[-π, π)`
//! - [`normalize_between_zero_and_two_pi`] reduces into `[0, 2π)`
//!
//! The upper bound of each window maps onto its lower bound.
//!
//! ```
//! use plane_angle::{normalize_between_minus_pi_and_pi, normalize_between_zero_and_two_pi, PI};
//!
//! assert_eq!(normalize_between_minus_pi_and_pi(PI), -PI);
//! assert_eq!(normalize_between_zero_and_two_pi(2f64 * PI), 0f64);
//! ```
//!
//! Works at `f64` and `f32` precision, and without `std`.

#![no_std]

mod checked;
mod error;
mod math;
mod normalize;

pub use checked::{
  try_normalize, try_normalize_between_minus_pi_and_pi, try_normalize_between_zero_and_two_pi,
};
pub use error::{Error, Result};
pub use math::{Radian, PI, TWO_PI};
pub use normalize::{
  normalize, normalize_between_minus_pi_and_pi, normalize_between_zero_and_two_pi, Normalizer,
};
