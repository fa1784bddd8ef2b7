//! Sequence solving.
//!
//! Responsibilities:
//!
//! - validate sequence parameters (`n >= 3`, index bounds)
//! - fit the quadratic curve (natural or pinned mode)
//! - materialize the full sequence or answer single-element queries

pub mod quadratic;

pub use quadratic::*;
