/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
mod error;
pub mod traits;

/// Polynomials
pub mod algebra;

pub use algebra::poly::key::{Exponent, MonomialKey};
pub use algebra::poly::sparse::Polynomial;
pub use error::Error;
