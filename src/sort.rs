//! Case-insensitive name ordering

use std::cmp::Ordering;

/// Compare two names byte-wise with ASCII case folding.
///
/// This is the total order used for sorted output. Non-ASCII bytes compare
/// by value, unfolded.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}
