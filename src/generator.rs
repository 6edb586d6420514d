use rand::Rng;
use zeroize::Zeroizing;

use crate::alphabet::{Alphabets, CharClass};
use crate::error::PolicyError;
use crate::policy::PasswordPolicy;

/// Generate a password satisfying `policy`, drawing randomness from `rng`.
///
/// The output starts with the per-class minimums in fixed class order
/// (lowercase, uppercase, digits, special) and is then padded from the pool
/// of allowed classes up to `policy.length`. Required characters are never
/// truncated: when the minimums sum past `length`, the output is longer than
/// `length`. Callers wanting unpredictable passwords must pass a
/// cryptographically secure `rng`, e.g. `rand::rngs::OsRng`.
pub fn generate_password<R: Rng>(
    policy: &PasswordPolicy,
    rng: &mut R,
) -> Result<Zeroizing<String>, PolicyError> {
    let alphabets = Alphabets::build(&policy.excluded_characters);
    policy.validate(&alphabets)?;

    let capacity = policy.length.max(policy.min_total());
    let mut password: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(capacity));

    // Seed: per-class minimums in class order, each draw differing from its
    // immediate predecessor.
    for class in CharClass::ALL {
        let alphabet = alphabets.class(class);
        for _ in 0..policy.min(class) {
            let last = password.last().copied();
            let candidates: Vec<u8> = alphabet
                .iter()
                .copied()
                .filter(|&b| Some(b) != last)
                .collect();
            match pick(rng, &candidates) {
                Some(b) => password.push(b),
                None => return Err(PolicyError::AdjacentRepeatImpossible { class }),
            }
        }
    }

    // A requested unique floor beats the length target: a seed with too few
    // distinct characters collapses to its distinct characters (first
    // occurrence order) and padding switches to globally unique draws.
    let mut unique_padding = false;
    if policy.min_unique_characters > 0 && distinct_count(&password) < policy.min_unique_characters
    {
        dedup_preserving_order(&mut password);
        unique_padding = true;
    }

    let pool = alphabets.pool(policy);

    while password.len() < policy.length {
        let candidates: Vec<u8> = if unique_padding {
            pool.iter()
                .copied()
                .filter(|b| !password.contains(b))
                .collect()
        } else {
            let last = password.last().copied();
            pool.iter().copied().filter(|&b| Some(b) != last).collect()
        };
        match pick(rng, &candidates) {
            Some(b) => password.push(b),
            None if unique_padding => {
                return Err(PolicyError::UniquePoolExhausted {
                    needed: policy.length - password.len(),
                });
            }
            None => return Err(PolicyError::PoolRepeatImpossible),
        }
    }

    // Alphabets are ASCII, so byte-to-char is exact.
    Ok(Zeroizing::new(
        password.iter().map(|&b| b as char).collect(),
    ))
}

fn pick<R: Rng>(rng: &mut R, candidates: &[u8]) -> Option<u8> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

fn distinct_count(bytes: &[u8]) -> usize {
    let mut seen = [false; 256];
    let mut count = 0;
    for &b in bytes {
        if !seen[b as usize] {
            seen[b as usize] = true;
            count += 1;
        }
    }
    count
}

fn dedup_preserving_order(bytes: &mut Vec<u8>) {
    let mut seen = [false; 256];
    bytes.retain(|&b| {
        if seen[b as usize] {
            false
        } else {
            seen[b as usize] = true;
            true
        }
    });
}
