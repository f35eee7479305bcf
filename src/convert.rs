//! Small conversion utilities: enum discriminants and bit reinterpretation.
//!
//! [`ToUnderlying`] turns a fieldless enum into its underlying discriminant
//! type without the caller writing an `as` cast at every use site; wire it
//! up with [`impl_to_underlying!`](crate::impl_to_underlying).
//!
//! [`bit_cast`] reinterprets a value's bits as another type of the same
//! size. Both sides must be plain-old-data: `bytemuck`'s `NoUninit` and
//! `AnyBitPattern` bounds enforce that at compile time, and the size check
//! happens at the cast. Use [`try_bit_cast`] to get the mismatch as an
//! error instead of a panic.

use bytemuck::{AnyBitPattern, NoUninit, PodCastError};

/// Conversion from a fieldless enum to its underlying discriminant type.
pub trait ToUnderlying {
    type Underlying;

    fn to_underlying(self) -> Self::Underlying;
}

/// Implement [`ToUnderlying`] for a fieldless enum.
///
/// ```
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Mode {
///     Read,
///     Write = 4,
/// }
///
/// value_semantics::impl_to_underlying!(Mode, u8);
///
/// use value_semantics::convert::ToUnderlying;
/// assert_eq!(Mode::Write.to_underlying(), 4);
/// ```
#[macro_export]
macro_rules! impl_to_underlying {
    ($ty:ty, $underlying:ty) => {
        impl $crate::convert::ToUnderlying for $ty {
            type Underlying = $underlying;

            fn to_underlying(self) -> $underlying {
                self as $underlying
            }
        }
    };
}

/// Reinterpret `value`'s bits as a `Dst` of the same size.
///
/// # Panics
///
/// Panics if the two types differ in size.
pub fn bit_cast<Src: NoUninit, Dst: AnyBitPattern>(value: Src) -> Dst {
    bytemuck::cast(value)
}

/// [`bit_cast`] with the size mismatch surfaced as an error.
pub fn try_bit_cast<Src: NoUninit, Dst: AnyBitPattern>(value: Src) -> Result<Dst, PodCastError> {
    bytemuck::try_cast(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::{Pod, Zeroable};

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    #[repr(u8)]
    enum Level {
        Low,
        Mid = 5,
        High,
    }

    crate::impl_to_underlying!(Level, u8);

    #[test]
    fn discriminants_convert() {
        assert_eq!(Level::Low.to_underlying(), 0);
        assert_eq!(Level::Mid.to_underlying(), 5);
        assert_eq!(Level::High.to_underlying(), 6);
    }

    #[test]
    fn float_bits_round_trip() {
        let bits: u32 = bit_cast(1.0f32);
        assert_eq!(bits, 0x3f80_0000);
        assert_eq!(bits, 1.0f32.to_bits());

        let back: f32 = bit_cast(bits);
        assert_eq!(back, 1.0);
    }

    #[test]
    fn bytes_to_word() {
        let word: u32 = bit_cast([0x01u8, 0x02, 0x03, 0x04]);
        assert_eq!(word, u32::from_ne_bytes([0x01, 0x02, 0x03, 0x04]));
    }

    #[derive(Clone, Copy, Pod, Zeroable, PartialEq, Debug)]
    #[repr(C)]
    struct Rgba {
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    }

    #[test]
    fn custom_pod_struct_casts() {
        let pixel = Rgba {
            r: 0xde,
            g: 0xad,
            b: 0xbe,
            a: 0xef,
        };
        let packed: u32 = bit_cast(pixel);
        let unpacked: Rgba = bit_cast(packed);
        assert_eq!(unpacked, pixel);
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let result: Result<[u8; 2], PodCastError> = try_bit_cast(7u32);
        assert_eq!(result, Err(PodCastError::SizeMismatch));
    }
}
