//! Fixed hashing contract shared by all qualifier values.

/// Name of the single attribute every qualifier declaration carries.
pub(crate) const VALUE_ATTRIBUTE: &str = "value";

/// Rolling 31-based hash over the UTF-16 code units of a string.
///
/// Uses wrapping 32-bit signed arithmetic so the result is identical on
/// every platform and never panics in debug builds.
pub(crate) fn code_unit_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Hash of a single named attribute:
/// `(127 * code_unit_hash(attribute)) ^ code_unit_hash(value)`.
///
/// Every construction path must agree on this value for equal inputs;
/// binding maps rely on it when matching qualifier keys.
pub(crate) fn attribute_hash(attribute: &str, value: &str) -> i32 {
    127_i32.wrapping_mul(code_unit_hash(attribute)) ^ code_unit_hash(value)
}
