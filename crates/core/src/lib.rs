//! Scoped, iterable sessions over video capture and writer handles.

pub mod capture;
pub mod shared;
