//! Platform-specific implementations.
//!
//! Only Windows provides the composition stack; the rest of the crate is
//! portable and is what the tests exercise.

#[cfg(target_os = "windows")]
pub mod windows;
