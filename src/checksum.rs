//! What a payload contributes to [`Tree::checksum`][crate::Tree::checksum].

/// Payloads that can take part in a tree checksum.
///
/// Numbers contribute themselves, and every integer up to 64 bits fits an `i128` exactly.
/// Text has no additive structure and contributes `0`, so the checksum of a tree of
/// strings is always `0`.
pub trait Checksum {
    /// This value's share of the checksum.
    fn contribution(&self) -> i128;
}

macro_rules! numeric_checksum {
    ($($t:ty),* $(,)?) => {
        $(
            impl Checksum for $t {
                fn contribution(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

numeric_checksum!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Checksum for String {
    fn contribution(&self) -> i128 {
        0
    }
}

impl Checksum for &str {
    fn contribution(&self) -> i128 {
        0
    }
}

impl Checksum for char {
    fn contribution(&self) -> i128 {
        0
    }
}
