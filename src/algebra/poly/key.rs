use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
};

use itertools::Itertools;
use num_traits::ToPrimitive;

use crate::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BadExponent {
    /// Negative, fractional, or not an integer type
    NotNonNegativeInteger,
    /// A non-negative integer beyond `u32::MAX`
    TooLarge,
}

/// Conversion of a raw exponent into a power of a variable
pub trait Exponent {
    fn to_exponent(&self) -> Result<u32, BadExponent>;
}

macro_rules! impl_exponent_int {
    ( $( $x:ty ),* ) => {
        $(
            impl Exponent for $x {
                fn to_exponent(&self) -> Result<u32, BadExponent> {
                    self.to_u32().ok_or_else(|| {
                        if self.to_i128().map_or(false, |e| e < 0) {
                            BadExponent::NotNonNegativeInteger
                        } else {
                            BadExponent::TooLarge
                        }
                    })
                }
            }
        )*
    };
}

impl_exponent_int!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_exponent_float {
    ( $( $x:ty ),* ) => {
        $(
            // floats are never exponents, not even whole ones like `2.0`
            impl Exponent for $x {
                fn to_exponent(&self) -> Result<u32, BadExponent> {
                    Err(BadExponent::NotNonNegativeInteger)
                }
            }
        )*
    };
}

impl_exponent_float!(f32, f64);

/// Check that all entries are non-negative integers
///
/// On success, returns the exponents in their original order and length.
pub fn validate_exponents<E>(raw: &[E]) -> Result<Vec<u32>, Error>
where
    E: Exponent + Debug,
{
    raw.iter()
        .map(|e| e.to_exponent())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            let exponents = format!("({:?})", raw.iter().format(", "));
            match err {
                BadExponent::NotNonNegativeInteger => {
                    Error::InvalidKey { exponents }
                }
                BadExponent::TooLarge => Error::ExponentTooLarge { exponents },
            }
        })
}

/// Exponent vector of a monomial
///
/// Entry `i` is the power of the variable `x<i>`. Keys of different
/// lengths are compared as if padded with zeros, so `[1]` and `[1, 0]`
/// denote the same monomial. The exponents are kept exactly as given,
/// except that a key without any positive exponent is always stored as the
/// empty key denoting the constant term.
#[derive(Clone, Default)]
pub struct MonomialKey {
    exponents: Vec<u32>,
}

impl MonomialKey {
    /// The canonical key of the constant term
    pub fn constant() -> Self {
        Self {
            exponents: Vec::new(),
        }
    }

    pub fn new(exponents: Vec<u32>) -> Self {
        if exponents.iter().all(|&p| p == 0) {
            Self::constant()
        } else {
            Self { exponents }
        }
    }

    /// Validate and convert raw exponents
    ///
    /// Fails if any entry is not a non-negative integer.
    pub fn try_from_raw<E>(raw: &[E]) -> Result<Self, Error>
    where
        E: Exponent + Debug,
    {
        validate_exponents(raw).map(Self::new)
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Whether this is the (empty) key of the constant term
    pub fn is_constant(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Variable indices with positive powers, in ascending order
    pub fn factors(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.exponents
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, p)| *p > 0)
    }

    // exponents without trailing zeroes
    fn significant(&self) -> &[u32] {
        let len = self
            .exponents
            .iter()
            .rposition(|&p| p != 0)
            .map(|pos| pos + 1)
            .unwrap_or_default();
        &self.exponents[..len]
    }
}

impl PartialEq for MonomialKey {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for MonomialKey {}

impl Hash for MonomialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state)
    }
}

impl PartialOrd for MonomialKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonomialKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.significant().cmp(other.significant())
    }
}

impl From<Vec<u32>> for MonomialKey {
    fn from(source: Vec<u32>) -> Self {
        Self::new(source)
    }
}

impl<const N: usize> From<[u32; N]> for MonomialKey {
    fn from(source: [u32; N]) -> Self {
        Self::new(source.to_vec())
    }
}

impl From<&[u32]> for MonomialKey {
    fn from(source: &[u32]) -> Self {
        Self::new(source.to_vec())
    }
}

impl Debug for MonomialKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MonomialKey{self}")
    }
}

impl Display for MonomialKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.exponents.as_slice() {
            [p] => write!(f, "({p},)"),
            exponents => write!(f, "({})", exponents.iter().format(", ")),
        }
    }
}
