//! Native interop
//!
//! - `utf8`: string marshaling with scoped buffer release
//! - `ffi`: C ABI entry points (exported with the `ffi` feature)

pub mod ffi;
mod utf8;

pub use utf8::{NativeUtf8, free_native, from_native, to_native, with_native};
