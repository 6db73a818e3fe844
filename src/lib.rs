#![no_std]

// std backs the float math and `std::error::Error` when enabled.
#[cfg(all(feature = "std", not(test)))]
extern crate std;

// Tests always link std, so 'cargo test' runs on a PC normally.
#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

pub mod bitrev;
pub mod common;
pub mod fixed;
pub mod float;
pub mod stage;

pub use common::{Direction, FftError, FftProcess, is_power_of_two};
pub use fixed::{Q15_ONE, Sc16, Sc16Table, fft2r_sc16};
pub use float::{Fc32Table, fft2r_fc32};
