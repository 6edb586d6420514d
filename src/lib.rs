pub mod alphabet;
pub mod error;
pub mod generator;
pub mod policy;

pub use alphabet::{Alphabets, CharClass};
pub use error::PolicyError;
pub use generator::generate_password;
pub use policy::PasswordPolicy;
