//! Commonly used utilities.

pub mod hash;
pub mod hash_value;

pub use self::hash::{hash, FastHashMap};
pub use self::hash_value::HashValue;
