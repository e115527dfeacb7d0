//! Core utilities: wall-clock time

pub mod time;
