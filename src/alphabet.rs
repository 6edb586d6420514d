use std::fmt;

use crate::policy::PasswordPolicy;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!#$%&'()*+,-./:;<=>?@[]^_{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    /// Seed and pool construction both walk classes in this fixed order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub const fn base(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digit",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// The four class alphabets with a policy's excluded characters removed.
pub struct Alphabets {
    lowercase: Vec<u8>,
    uppercase: Vec<u8>,
    digits: Vec<u8>,
    special: Vec<u8>,
}

impl Alphabets {
    pub fn build(excluded_characters: &str) -> Self {
        let filter = |base: &[u8]| -> Vec<u8> {
            base.iter()
                .copied()
                .filter(|&b| !excluded_characters.contains(b as char))
                .collect()
        };

        Self {
            lowercase: filter(LOWERCASE),
            uppercase: filter(UPPERCASE),
            digits: filter(DIGITS),
            special: filter(SPECIAL),
        }
    }

    pub fn class(&self, class: CharClass) -> &[u8] {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digits => &self.digits,
            CharClass::Special => &self.special,
        }
    }

    /// Padding pool: the alphabets of every allowed class, concatenated in
    /// class order. Classes are disjoint, so the pool has no duplicates.
    pub fn pool(&self, policy: &PasswordPolicy) -> Vec<u8> {
        let mut pool = Vec::new();
        for class in CharClass::ALL {
            if policy.allows(class) {
                pool.extend_from_slice(self.class(class));
            }
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 29);
    }

    #[test]
    fn test_classes_disjoint_and_unique() {
        let all: Vec<u8> = CharClass::ALL
            .iter()
            .flat_map(|c| c.base().iter().copied())
            .collect();
        let unique: HashSet<u8> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len(), "Class alphabets overlap");
        assert_eq!(all.len(), 91);
    }

    #[test]
    fn test_exclusion_filters_every_class() {
        let alphabets = Alphabets::build("az0~");

        assert_eq!(alphabets.class(CharClass::Lowercase).len(), 24);
        assert_eq!(alphabets.class(CharClass::Uppercase).len(), 26);
        assert_eq!(alphabets.class(CharClass::Digits).len(), 9);
        assert_eq!(alphabets.class(CharClass::Special).len(), 28);

        assert!(!alphabets.class(CharClass::Lowercase).contains(&b'a'));
        assert!(!alphabets.class(CharClass::Lowercase).contains(&b'z'));
        assert!(!alphabets.class(CharClass::Digits).contains(&b'0'));
        assert!(!alphabets.class(CharClass::Special).contains(&b'~'));
    }

    #[test]
    fn test_exclude_everything_leaves_empty_class() {
        let all_special: String = SPECIAL.iter().map(|&b| b as char).collect();
        let alphabets = Alphabets::build(&all_special);
        assert!(alphabets.class(CharClass::Special).is_empty());
        assert_eq!(alphabets.class(CharClass::Lowercase).len(), 26);
    }

    #[test]
    fn test_pool_respects_allow_flags_and_order() {
        let policy = PasswordPolicy {
            allow_lowercase: false,
            allow_special: false,
            ..PasswordPolicy::default()
        };
        let alphabets = Alphabets::build("");
        let pool = alphabets.pool(&policy);

        assert_eq!(pool.len(), 36);
        assert_eq!(&pool[..26], UPPERCASE);
        assert_eq!(&pool[26..], DIGITS);
    }

    #[test]
    fn test_pool_empty_when_nothing_allowed() {
        let policy = PasswordPolicy {
            allow_lowercase: false,
            allow_uppercase: false,
            allow_digits: false,
            allow_special: false,
            ..PasswordPolicy::default()
        };
        let alphabets = Alphabets::build("");
        assert!(alphabets.pool(&policy).is_empty());
    }
}
