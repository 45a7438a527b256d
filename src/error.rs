use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// An exponent is negative or not an integer
    #[error("Invalid monomial key {exponents}: exponents have to be non-negative integers")]
    InvalidKey { exponents: String },
    /// An exponent is a non-negative integer that does not fit into a `u32`
    #[error("Invalid monomial key {exponents}: exponents must not exceed {}", u32::MAX)]
    ExponentTooLarge { exponents: String },
    /// The same raw key was supplied more than once on construction
    #[error("Invalid input: key {key:?} occurs more than once, terms have to form a mapping")]
    InvalidInput { key: Vec<u32> },
}
