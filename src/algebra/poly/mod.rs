/// Monomial keys and their validation
pub mod key;
/// Polynomials as maps from monomial keys to coefficients
pub mod sparse;
