// Prime capacity selection.
//
// The table keeps its length prime so that the quadratic probe sequence
// `(hash + i*i) % capacity` cycles through a large portion of the slots
// before repeating. Note that a prime modulus alone does not guarantee the
// sequence visits every slot; the load-factor guard in `RawTable` is what
// keeps a reachable free slot available in practice.

/// Returns the smallest prime greater than or equal to `n`.
pub fn next_prime(mut n: usize) -> usize {
    while !is_prime(n) {
        n += 1;
    }
    n
}

/// Primality by trial division.
///
/// After ruling out multiples of 2 and 3, every remaining prime candidate is
/// of the form `6k ± 1`, so only those divisors are tried up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}
