//! Inversion lists: sorted boundary sequences encoding membership over the
//! code point domain.
//!
//! # Module Organization
//!
//! - `list`: `InversionList`, its builder, `validate` and the `Ranges` iterator
//! - `set_ops`: union, intersection, difference, complement and slicing

mod list;
mod set_ops;

pub use list::{validate, InversionList, Ranges};
