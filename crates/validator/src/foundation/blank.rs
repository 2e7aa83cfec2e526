//! Emptiness as an explicit capability.
//!
//! [`WhenNotEmpty`](crate::combinators::WhenNotEmpty) skips its rules for
//! blank input. What "blank" means depends on the type: `""` for strings,
//! `0` for integers. Any other type can opt in with an empty impl and is then
//! never blank, so the guarded rules always run for it.

/// Types that know whether they hold a blank value.
pub trait Blank {
    /// Returns true if the value is blank.
    ///
    /// The default is `false`: the value always counts as filled in.
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for &T
where
    T: Blank + ?Sized,
{
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! impl_blank_for_integers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_blank_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Blank for bool {}
impl Blank for char {}
impl Blank for f32 {}
impl Blank for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_blank_only_when_empty() {
        assert!("".is_blank());
        assert!(!" ".is_blank());
        assert!(String::new().is_blank());
        assert!(!String::from("x").is_blank());
    }

    #[test]
    fn integers_are_blank_only_at_zero() {
        assert!(0_i64.is_blank());
        assert!(!(-1_i32).is_blank());
        assert!(0_usize.is_blank());
        assert!(!7_u8.is_blank());
    }

    #[test]
    fn other_types_are_never_blank() {
        assert!(!false.is_blank());
        assert!(!0.0_f64.is_blank());
        assert!(!'\0'.is_blank());
    }

    #[test]
    fn references_forward() {
        let s: &str = "";
        assert!((&s).is_blank());
    }
}
