//! Checked narrowing from `i64` to the smaller integer widths

use crate::error::{ExtractError, Result};

/// Integer widths an `i64` field value can be narrowed into
pub trait Narrow: Sized + Copy {
    /// Type name reported when a value does not fit
    const TARGET: &'static str;

    fn try_narrow(value: i64) -> Option<Self>;
}

macro_rules! impl_narrow {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Narrow for $ty {
                const TARGET: &'static str = $name;

                #[inline]
                fn try_narrow(value: i64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_narrow!(i8 => "byte", i16 => "short", i32 => "int");

/// Narrow `value` into `N`, rejecting values outside `N::MIN..=N::MAX`
#[inline]
pub fn narrow<N: Narrow>(value: i64) -> Result<N> {
    N::try_narrow(value).ok_or_else(|| ExtractError::unsupported_narrowing(value, N::TARGET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_at_bounds() {
        assert_eq!(narrow::<i32>(2_147_483_647).unwrap(), i32::MAX);
        assert_eq!(narrow::<i32>(-2_147_483_648).unwrap(), i32::MIN);
        assert_eq!(narrow::<i16>(32_767).unwrap(), i16::MAX);
        assert_eq!(narrow::<i8>(-128).unwrap(), i8::MIN);
    }

    #[test]
    fn test_narrow_rejects_above_max() {
        assert_eq!(
            narrow::<i32>(2_147_483_648),
            Err(ExtractError::unsupported_narrowing(2_147_483_648, "int"))
        );
        assert_eq!(
            narrow::<i16>(32_768),
            Err(ExtractError::unsupported_narrowing(32_768, "short"))
        );
        assert_eq!(
            narrow::<i8>(128),
            Err(ExtractError::unsupported_narrowing(128, "byte"))
        );
    }

    #[test]
    fn test_narrow_rejects_below_min() {
        assert!(narrow::<i32>(-2_147_483_649).is_err());
        assert!(narrow::<i16>(-32_769).is_err());
        assert!(narrow::<i8>(-129).is_err());
    }
}
