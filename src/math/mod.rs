//! Numerical primitives used by the pricing engine and the implied volatility
//! solver.

mod normal;
mod root_finder;

pub use normal::StandardNormal;
pub use root_finder::{Root, RootFinderConfig, RootFinderError, find_root};
