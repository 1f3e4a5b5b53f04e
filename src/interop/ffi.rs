//! C ABI functions.
//!
//! Symbols are exported unmangled when the `ffi` feature is enabled.

use std::os::raw::c_char;

use super::utf8::{NativeUtf8, free_native, from_native};
use crate::errors::IpIntelError;
use crate::geometry::{calculate_area, try_calculate_area};

/// Status codes.
pub const IPI_OK: i32 = 0;
pub const IPI_ERR_NULL_PTR: i32 = -1;
pub const IPI_ERR_INVALID_WKT: i32 = -2;
pub const IPI_ERR_UNKNOWN: i32 = -99;

/// Computes the projected area of a WKT geometry.
///
/// Malformed WKT is not an error: it reports an area of 0 over 0 geometries.
///
/// # Safety
/// - `wkt` must be a valid null-terminated UTF-8 string
/// - `out_area` and `out_count` must be valid, writable pointers
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ipi_calculate_area(
    wkt: *const c_char,
    out_area: *mut i64,
    out_count: *mut u64,
) -> i32 {
    if wkt.is_null() || out_area.is_null() || out_count.is_null() {
        return IPI_ERR_NULL_PTR;
    }

    let Some(text) = (unsafe { from_native(wkt) }) else {
        return IPI_ERR_NULL_PTR;
    };
    let result = calculate_area(&text);

    unsafe {
        *out_area = result.area_km2;
        *out_count = result.geometries as u64;
    }
    IPI_OK
}

/// Like [`ipi_calculate_area`], but malformed WKT is reported as
/// `IPI_ERR_INVALID_WKT` and projection failures as `IPI_ERR_UNKNOWN`.
/// The outputs are left untouched on error.
///
/// # Safety
/// Same as [`ipi_calculate_area`].
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ipi_try_calculate_area(
    wkt: *const c_char,
    out_area: *mut i64,
    out_count: *mut u64,
) -> i32 {
    if wkt.is_null() || out_area.is_null() || out_count.is_null() {
        return IPI_ERR_NULL_PTR;
    }

    let Some(text) = (unsafe { from_native(wkt) }) else {
        return IPI_ERR_NULL_PTR;
    };

    match try_calculate_area(&text) {
        Ok(result) => {
            unsafe {
                *out_area = result.area_km2;
                *out_count = result.geometries as u64;
            }
            IPI_OK
        }
        Err(IpIntelError::WktParse(_)) => IPI_ERR_INVALID_WKT,
        Err(_) => IPI_ERR_UNKNOWN,
    }
}

/// Computes the projected area and returns it as a JSON document
/// (`{"area_km2": .., "geometries": ..}`).
///
/// # Safety
/// - `wkt` must be a valid null-terminated UTF-8 string or null
/// - The caller must free the result using `ipi_free_string`
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ipi_calculate_area_json(wkt: *const c_char) -> *mut c_char {
    let Some(text) = (unsafe { from_native(wkt) }) else {
        return std::ptr::null_mut();
    };

    let json = match serde_json::to_string(&calculate_area(&text)) {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match NativeUtf8::new(&json) {
        Ok(buffer) => buffer.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees a string allocated by this library.
///
/// # Safety
/// - `ptr` must have been returned by an `ipi_*` function
/// - `ptr` must not be used after this call
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ipi_free_string(ptr: *mut c_char) {
    unsafe { free_native(ptr) }
}

/// Returns the library version.
///
/// The returned string is statically allocated and must not be freed.
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub extern "C" fn ipi_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
