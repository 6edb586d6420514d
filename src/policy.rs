use crate::alphabet::{Alphabets, CharClass};
use crate::error::PolicyError;

/// Declarative constraints a generated password must satisfy.
///
/// A positive per-class minimum forces seed characters from that class even
/// when the matching `allow_*` flag is false; the flags only govern the
/// padding pool. That asymmetry is part of the contract, not validated away.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub length: usize,
    pub allow_lowercase: bool,
    pub allow_uppercase: bool,
    pub allow_digits: bool,
    pub allow_special: bool,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_digits: usize,
    pub min_special: usize,
    pub min_unique_characters: usize,
    pub excluded_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 10,
            allow_lowercase: true,
            allow_uppercase: true,
            allow_digits: true,
            allow_special: true,
            min_lowercase: 1,
            min_uppercase: 1,
            min_digits: 1,
            min_special: 1,
            min_unique_characters: 1,
            excluded_characters: String::new(),
        }
    }
}

impl PasswordPolicy {
    pub fn min(&self, class: CharClass) -> usize {
        match class {
            CharClass::Lowercase => self.min_lowercase,
            CharClass::Uppercase => self.min_uppercase,
            CharClass::Digits => self.min_digits,
            CharClass::Special => self.min_special,
        }
    }

    pub fn allows(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.allow_lowercase,
            CharClass::Uppercase => self.allow_uppercase,
            CharClass::Digits => self.allow_digits,
            CharClass::Special => self.allow_special,
        }
    }

    pub fn min_total(&self) -> usize {
        CharClass::ALL.iter().map(|&c| self.min(c)).sum()
    }

    /// Upfront checks against the post-exclusion alphabets. Draw-time
    /// conditions (a singleton class forced to repeat the previous class's
    /// last character, unique-padding exhaustion) are caught during
    /// generation; everything decidable before sampling is decided here.
    pub fn validate(&self, alphabets: &Alphabets) -> Result<(), PolicyError> {
        for class in CharClass::ALL {
            let min = self.min(class);
            if min == 0 {
                continue;
            }
            let alphabet = alphabets.class(class);
            if alphabet.is_empty() {
                return Err(PolicyError::EmptyClassAlphabet {
                    class,
                    required: min,
                });
            }
            if min > 1 && alphabet.len() == 1 {
                return Err(PolicyError::AdjacentRepeatImpossible { class });
            }
        }

        if self.length > self.min_total() && alphabets.pool(self).is_empty() {
            return Err(PolicyError::EmptyPool);
        }

        Ok(())
    }
}
