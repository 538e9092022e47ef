//! Country codes, errors, and input normalization.
//!
//! These are the types shared by the checksum engine and the VIES client.

mod country;
mod error;
mod normalizer;

pub use country::*;
pub use error::*;
pub use normalizer::normalize;
