//! Derived environmental metrics.
//!
//! Every function in this module tree is pure, synchronous and total:
//! no input makes one of them panic, and out-of-domain readings degrade
//! to the raw value (or to a sentinel) instead of erroring.

pub mod astro;
pub mod codes;
pub mod comfort;
pub mod format;
pub mod outdoor;
