//! A set of utilities for working with amount literals.

/// Create an amount string from a decimal literal.
///
/// The literal is checked at compile time (so `num!(1.2.3)` won't build) and
/// comes out exactly as written, trailing zeros and all: `num!(1.50)` is
/// `"1.50"`. Crate-internal: it's in scope for the modules declared after
/// `util` in `lib.rs`.
#[allow(unused_macros)]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val).to_string()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn literals() {
        assert_eq!(num!(3), "3");
        assert_eq!(num!(1.50), "1.50");
        assert_eq!(num!(-0.2333), "-0.2333");
    }
}
