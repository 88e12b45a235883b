use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
  #[error("angle is not finite: {0}")]
  NonFiniteAngle(f64),
  #[error("center is not finite: {0}")]
  NonFiniteCenter(f64),
}

impl Error {
  pub fn value(&self) -> f64 {
    match *self {
      Error::NonFiniteAngle(v) | Error::NonFiniteCenter(v) => v,
    }
  }
}
