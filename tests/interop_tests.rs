//! Native UTF-8 marshaling

use std::ffi::CStr;
use std::os::raw::c_char;

use ipintel::errors::IpIntelError;
use ipintel::interop::{NativeUtf8, free_native, from_native, to_native, with_native};
use serde_json::{Value, json};

#[test]
fn test_round_trip_preserves_text() {
    let samples = [
        "Päijät-Häme",
        "Ísafjörður",
        "Москва",
        "القاهرة",
        "서울특별시",
        "𝔘𝔫𝔦𝔠𝔬𝔡𝔢 🌍",
        "",
    ];

    for text in samples {
        let native = to_native(&Value::String(text.to_string())).unwrap();
        let decoded = unsafe { from_native(native.as_ptr()) };
        assert_eq!(decoded.as_deref(), Some(text));
        native.release();
    }
}

#[test]
fn test_buffer_layout() {
    let native = NativeUtf8::new("Åbo").unwrap();
    let bytes = native.as_bytes_with_nul();

    assert_eq!(native.len(), "Åbo".len());
    assert_eq!(bytes.len(), native.len() + 1);
    assert_eq!(bytes.last(), Some(&0));
    assert_eq!(bytes.iter().filter(|b| **b == 0).count(), 1);
    assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
}

#[test]
fn test_null_value_is_null_pointer() {
    let native = to_native(&Value::Null).unwrap();
    assert!(native.is_null());
    assert!(native.as_ptr().is_null());
    assert!(native.as_bytes_with_nul().is_empty());
    assert_eq!(unsafe { from_native(native.as_ptr()) }, None);
}

#[test]
fn test_non_string_values_are_type_mismatch() {
    for value in [json!(42), json!(true), json!(["a"]), json!({"k": "v"})] {
        let err = to_native(&value).unwrap_err();
        assert!(matches!(err, IpIntelError::TypeMismatch(_)), "value: {}", value);
    }
}

#[test]
fn test_invalid_utf8_decodes_lossily() {
    let raw: &[u8] = b"caf\xE9\0";
    let decoded = unsafe { from_native(raw.as_ptr() as *const c_char) }.unwrap();
    assert_eq!(decoded, "caf\u{FFFD}");
}

#[test]
fn test_decode_stops_at_terminator() {
    let raw: &[u8] = b"Lahti\0ignored";
    let decoded = unsafe { from_native(raw.as_ptr() as *const c_char) };
    assert_eq!(decoded.as_deref(), Some("Lahti"));
}

#[test]
fn test_with_native_scoped_use() {
    let len = with_native(&json!("Kraków"), |ptr| {
        let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(text, "Kraków");
        text.len()
    })
    .unwrap();
    assert_eq!(len, "Kraków".len());

    let saw_null = with_native(&Value::Null, |ptr| ptr.is_null()).unwrap();
    assert!(saw_null);

    assert!(with_native(&json!(1.5), |_| ()).is_err());
}

#[test]
fn test_into_raw_and_free() {
    let ptr = NativeUtf8::new("handed over").unwrap().into_raw();
    assert!(!ptr.is_null());
    assert_eq!(
        unsafe { from_native(ptr) }.as_deref(),
        Some("handed over")
    );
    unsafe { free_native(ptr) };
    unsafe { free_native(std::ptr::null_mut()) };
}
