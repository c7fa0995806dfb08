#![cfg_attr(not(feature = "std"), no_std)]

//! SHA-3 hashing over the Keccak sponge, and ECB iteration over a caller-supplied
//! 128-bit block cipher.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod ecb;
pub mod keccak;

#[doc(inline)]
pub use keccak::sha3;

pub use error::{Error, ErrorKind};

mod error;
