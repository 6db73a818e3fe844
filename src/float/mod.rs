pub mod complex;
mod core;

pub(crate) use self::core::sin_cos;
pub use self::core::butterfly;
pub use complex::{Fc32Table, fft2r_fc32};
