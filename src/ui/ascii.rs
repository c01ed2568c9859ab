/// Escape; every CSI sequence starts with it.
pub const ESC: char = '\x1B';

/// `ESC [` followed by a literal suffix, as a `&'static str`.
#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Two CSI sequences back to back.
#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!($crate::csi!($first), $crate::csi!($second))
    };
}
