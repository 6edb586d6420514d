use thiserror::Error;

use crate::alphabet::CharClass;

/// Invalid-policy failures. Every variant means the policy cannot be
/// satisfied; there is no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error(
        "no {class} characters remain after exclusions, but at least {required} {class} character(s) required"
    )]
    EmptyClassAlphabet { class: CharClass, required: usize },

    #[error("cannot avoid repeating adjacent characters: the {class} alphabet has a single candidate")]
    AdjacentRepeatImpossible { class: CharClass },

    #[error("padding required but no character class is allowed or non-empty")]
    EmptyPool,

    #[error("cannot avoid repeating adjacent characters: the padding pool has a single candidate")]
    PoolRepeatImpossible,

    #[error("allowed classes cannot supply {needed} more unique character(s)")]
    UniquePoolExhausted { needed: usize },
}
