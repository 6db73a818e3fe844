pub mod types;
mod core;
pub mod complex;

pub use self::core::butterfly;
pub use complex::{Sc16Table, fft2r_sc16};
pub use types::{Q15_ONE, Sc16};
