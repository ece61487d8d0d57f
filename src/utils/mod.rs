//! Utilities built on top of the message protocol.

mod compare;

pub use compare::compare;

#[cfg(test)]
pub mod tests;
