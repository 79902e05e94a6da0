//! Game implementations.

pub mod quadline;
