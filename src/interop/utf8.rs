//! UTF-8 string marshaling across the native boundary
//!
//! Host strings go out as null-terminated UTF-8 buffers owned by
//! [`NativeUtf8`]; buffers coming back are scanned up to their terminator
//! and decoded.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use serde_json::Value;

use crate::errors::{IpIntelError, Result};

/// Null-terminated UTF-8 buffer in native memory.
///
/// The buffer is released exactly once: when the value is dropped, when
/// [`release`](Self::release) is called, or by whoever receives the pointer
/// from [`into_raw`](Self::into_raw) via [`free_native`]. A null buffer owns
/// nothing.
#[derive(Debug)]
pub struct NativeUtf8 {
    ptr: *mut c_char,
    len: usize,
}

impl NativeUtf8 {
    pub fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    /// Encode `s` (no BOM) into a fresh `len + 1` byte buffer with a single
    /// trailing zero.
    pub fn new(s: &str) -> Result<Self> {
        let len = s.len();
        let owned = CString::new(s).map_err(|e| {
            IpIntelError::marshal(format!(
                "String contains an interior NUL byte at offset {}",
                e.nul_position()
            ))
        })?;

        Ok(Self {
            ptr: owned.into_raw(),
            len,
        })
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Encoded length in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Encoded bytes including the terminator; empty for a null buffer.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        // SAFETY: ptr came from CString::into_raw and holds len + 1 bytes
        unsafe { std::slice::from_raw_parts(self.ptr as *const u8, self.len + 1) }
    }

    /// Hand the buffer to the caller, who must release it with [`free_native`].
    pub fn into_raw(self) -> *mut c_char {
        let ptr = self.ptr;
        std::mem::forget(self);
        ptr
    }

    /// Release the buffer now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for NativeUtf8 {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            // SAFETY: ptr came from CString::into_raw and has not been freed
            drop(unsafe { CString::from_raw(self.ptr) });
            self.ptr = ptr::null_mut();
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Managed → native.
///
/// `Null` becomes a null buffer without allocating; anything other than a
/// string is a [`IpIntelError::TypeMismatch`].
pub fn to_native(value: &Value) -> Result<NativeUtf8> {
    match value {
        Value::Null => Ok(NativeUtf8::null()),
        Value::String(s) => NativeUtf8::new(s),
        other => Err(IpIntelError::type_mismatch(format!(
            "Expected a string value, found {}",
            value_kind(other)
        ))),
    }
}

/// Native → managed.
///
/// Invalid UTF-8 sequences decode as U+FFFD. A null pointer yields `None`.
///
/// # Safety
/// - `ptr` must be null or point to a readable, zero-terminated byte buffer.
///   The scan is unbounded: a missing terminator is undefined behaviour.
pub unsafe fn from_native(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: caller guarantees a zero-terminated buffer
    let raw = unsafe { CStr::from_ptr(ptr) };
    Some(raw.to_string_lossy().into_owned())
}

/// Release a buffer obtained from [`NativeUtf8::into_raw`]. Null is a no-op.
///
/// # Safety
/// - `ptr` must come from [`NativeUtf8::into_raw`] (or another
///   `CString::into_raw` in this library) and must not be used afterwards
/// - a buffer must be released only once
pub unsafe fn free_native(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: guaranteed by the caller
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Marshal `value`, run `f` with the native pointer, then release the buffer.
///
/// The buffer is released on every exit path, including unwinding out of `f`.
pub fn with_native<R>(value: &Value, f: impl FnOnce(*const c_char) -> R) -> Result<R> {
    let buffer = to_native(value)?;
    let out = f(buffer.as_ptr());
    buffer.release();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_multibyte() {
        for text in ["Päijät-Häme", "東京都", "Ærø 🚲", "plain ascii", ""] {
            let native = to_native(&json!(text)).unwrap();
            assert!(!native.is_null());
            let back = unsafe { from_native(native.as_ptr()) };
            assert_eq!(back.as_deref(), Some(text));
        }
    }

    #[test]
    fn test_buffer_layout() {
        let native = NativeUtf8::new("Häme").unwrap();
        assert_eq!(native.len(), "Häme".len());
        let bytes = native.as_bytes_with_nul();
        assert_eq!(bytes.len(), "Häme".len() + 1);
        assert_eq!(bytes.last(), Some(&0u8));
        assert_eq!(&bytes[..bytes.len() - 1], "Häme".as_bytes());
        // 无 BOM
        assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    }

    #[test]
    fn test_null_value_yields_null_pointer() {
        let native = to_native(&Value::Null).unwrap();
        assert!(native.is_null());
        assert!(native.as_ptr().is_null());
        assert!(native.as_bytes_with_nul().is_empty());
    }

    #[test]
    fn test_non_string_is_type_mismatch() {
        for value in [json!(42), json!(true), json!([1, 2]), json!({"a": 1})] {
            let err = to_native(&value).unwrap_err();
            assert!(matches!(err, IpIntelError::TypeMismatch(_)), "{:?}", err);
        }
    }

    #[test]
    fn test_interior_nul_rejected() {
        let err = NativeUtf8::new("a\0b").unwrap_err();
        assert!(matches!(err, IpIntelError::Marshal(_)));
    }

    #[test]
    fn test_from_native_null() {
        assert_eq!(unsafe { from_native(ptr::null()) }, None);
    }

    #[test]
    fn test_from_native_stops_at_terminator() {
        let raw = b"abc\0def\0";
        let s = unsafe { from_native(raw.as_ptr() as *const c_char) };
        assert_eq!(s.as_deref(), Some("abc"));
    }

    #[test]
    fn test_from_native_invalid_utf8_is_replaced() {
        let raw = b"ok\xFF\0";
        let s = unsafe { from_native(raw.as_ptr() as *const c_char) }.unwrap();
        assert_eq!(s, "ok\u{FFFD}");
    }

    #[test]
    fn test_into_raw_then_free() {
        let ptr = NativeUtf8::new("handoff").unwrap().into_raw();
        assert!(!ptr.is_null());
        assert_eq!(unsafe { from_native(ptr) }.as_deref(), Some("handoff"));
        unsafe { free_native(ptr) };
        unsafe { free_native(ptr::null_mut()) };
    }

    #[test]
    fn test_with_native_scoped() {
        let len = with_native(&json!("Päijät-Häme"), |ptr| {
            unsafe { from_native(ptr) }.map(|s| s.chars().count())
        })
        .unwrap();
        assert_eq!(len, Some(11));

        let saw_null = with_native(&Value::Null, |ptr| ptr.is_null()).unwrap();
        assert!(saw_null);

        assert!(with_native(&json!(1.5), |_| ()).is_err());
    }
}
