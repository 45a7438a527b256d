use std::iter::repeat_with;

use rand::Rng;

use crate::{MonomialKey, Polynomial};

// generate a random monomial key with up to `nvars` variables
// the length is sampled uniformly, so keys of different lengths are mixed
pub fn gen_key(nvars: usize, max_pow: u32, mut rng: impl Rng) -> MonomialKey {
    let len = rng.gen_range(0..=nvars);
    let powers = repeat_with(|| rng.gen_range(0..=max_pow)).take(len).collect();
    MonomialKey::new(powers)
}

// generate a random polynomial with at most `max_terms` terms
// coefficients are non-zero integers, so sums are exact
pub fn gen_poly(
    nvars: usize,
    max_pow: u32,
    max_terms: usize,
    mut rng: impl Rng,
) -> Polynomial {
    let nterms = rng.gen_range(0..=max_terms);
    repeat_with(|| {
        let key = gen_key(nvars, max_pow, &mut rng);
        let coeff = f64::from(rng.gen_range(1..=10u32));
        let coeff = if rng.gen() { coeff } else { -coeff };
        (key, coeff)
    })
    .take(nterms)
    .collect()
}
