#![doc = include_str!("../README.md")]

mod raw;
mod set;

#[cfg(feature = "serde")]
mod serde_impls;

pub use raw::{is_prime, next_prime, Slot};
pub use set::{Iter, ProbeSet};
