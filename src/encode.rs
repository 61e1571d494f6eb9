//! Output encoding.

pub mod png;
