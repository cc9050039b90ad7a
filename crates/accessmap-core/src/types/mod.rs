//!
//! Scalar wrappers shared by the codecs and the resource models.
//!
//! Both types carry numbers as exact decimal text across the CT boundary so
//! identifiers and large integers never pass through floating point.
//!

mod decimal;
mod id;

pub use decimal::*;
pub use id::*;
