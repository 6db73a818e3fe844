mod sc16;

pub use sc16::{Q15_ONE, Sc16};
