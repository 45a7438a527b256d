use std::{
    collections::{btree_map::Entry, BTreeMap, HashSet},
    fmt::{self, Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign},
};

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::{traits::WithVars, Error};

use super::key::{validate_exponents, Exponent, MonomialKey};

/// Sparse multivariate polynomial with floating-point coefficients
///
/// Each monomial key occurs at most once. Like terms are combined on
/// insertion and a term whose coefficient sums up to zero is removed.
/// A term that is inserted with a zero coefficient under a new key is
/// kept as is.
///
/// Terms are stored in ascending key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    terms: BTreeMap<MonomialKey, f64>,
}

impl Polynomial {
    /// The zero polynomial
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    pub fn constant(coeff: f64) -> Self {
        let mut res = Self::new();
        res.add_key_term(coeff, MonomialKey::constant());
        res
    }

    /// Construct a polynomial from a mapping of raw keys to coefficients
    ///
    /// The entries are added one by one in the order in which they are
    /// supplied, combining like terms. Fails if a key is not a sequence of
    /// non-negative integers, or if the same raw key occurs more than once.
    pub fn from_terms<I, K, E>(terms: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<[E]>,
        E: Exponent + Debug,
    {
        let mut res = Self::new();
        let mut seen = HashSet::new();
        for (raw, coeff) in terms {
            let exponents = validate_exponents(raw.as_ref())?;
            if !seen.insert(exponents.clone()) {
                return Err(Error::InvalidInput { key: exponents });
            }
            res.add_key_term(coeff, MonomialKey::new(exponents));
        }
        debug!("Constructed polynomial with {} terms", res.len());
        Ok(res)
    }

    /// Add a single term, combining it with a like term if there is one
    ///
    /// The key is validated before any change is made.
    pub fn add_term<E>(&mut self, coeff: f64, key: &[E]) -> Result<(), Error>
    where
        E: Exponent + Debug,
    {
        let key = MonomialKey::try_from_raw(key)?;
        self.add_key_term(coeff, key);
        Ok(())
    }

    /// Add a single term with an already validated key
    pub fn add_key_term(&mut self, coeff: f64, key: MonomialKey) {
        match self.terms.entry(key) {
            Entry::Occupied(mut entry) => {
                let sum = *entry.get() + coeff;
                if sum == 0. {
                    trace!("Term {} cancels", entry.key());
                    entry.remove();
                } else {
                    trace!("Combining term {}: {sum:?}", entry.key());
                    *entry.get_mut() = sum;
                }
            }
            Entry::Vacant(entry) => {
                trace!("New term {}: {coeff:?}", entry.key());
                entry.insert(coeff);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in ascending key order
    pub fn terms(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&MonomialKey, f64)> {
        self.terms.iter().map(|(k, c)| (k, *c))
    }

    pub fn into_terms(self) -> Vec<(MonomialKey, f64)> {
        self.terms.into_iter().collect()
    }

    /// Coefficient of the term with the given key
    ///
    /// Trailing zero exponents in `key` are ignored.
    pub fn coeff(&self, key: &MonomialKey) -> Option<f64> {
        self.terms.get(key).copied()
    }
}

impl Extend<(MonomialKey, f64)> for Polynomial {
    fn extend<I: IntoIterator<Item = (MonomialKey, f64)>>(&mut self, iter: I) {
        for (key, coeff) in iter {
            self.add_key_term(coeff, key);
        }
    }
}

impl FromIterator<(MonomialKey, f64)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (MonomialKey, f64)>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        debug!("Adding {} terms to {} terms", rhs.len(), self.len());
        self.extend(rhs.terms.iter().map(|(k, c)| (k.clone(), *c)));
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        debug!("Adding {} terms to {} terms", rhs.len(), self.len());
        self.extend(rhs.terms);
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: &Polynomial) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Self::Output {
        self.clone() + rhs
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'b Polynomial) -> Self::Output {
        self.clone() + rhs
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, p| acc + p)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

pub struct FmtPolynomial<'a, 'b, V> {
    p: &'a Polynomial,
    vars: &'b [V],
}

impl<'a, 'b, V: Display + 'b> WithVars<'a, &'b [V]> for Polynomial {
    type Output = FmtPolynomial<'a, 'b, V>;

    fn with_vars(&'a self, vars: &'b [V]) -> Self::Output {
        FmtPolynomial { p: self, vars }
    }
}

impl<'a, 'b, V: Display + 'b, const N: usize> WithVars<'a, &'b [V; N]>
    for Polynomial
{
    type Output = FmtPolynomial<'a, 'b, V>;

    fn with_vars(&'a self, vars: &'b [V; N]) -> Self::Output {
        FmtPolynomial { p: self, vars }
    }
}

impl<'a, 'b, V: Display> Display for FmtPolynomial<'a, 'b, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.p.is_empty() {
            return write!(f, "Polynomial(0)");
        }
        // highest key first, unnamed variables fall back to `x<i>`
        let terms = self.p.terms().rev().format_with(" + ", |(key, coeff), f| {
            f(&format_args!("{coeff:?}"))?;
            for (i, p) in key.factors() {
                match self.vars.get(i) {
                    Some(v) => f(&format_args!("*{v}^{p}"))?,
                    None => f(&format_args!("*x{i}^{p}"))?,
                }
            }
            Ok(())
        });
        write!(f, "Polynomial({terms})")
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars: &[&str] = &[];
        self.with_vars(vars).fmt(f)
    }
}
