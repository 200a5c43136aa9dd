//! Vehicle and stall identifiers.
//!
//! Both are dense `u32` indices: `VehicleId(i)` is the i-th vehicle in input
//! order and `StallId(s)` the s-th stall.  `u32::MAX` is reserved as the
//! `INVALID` sentinel, which is what an unserved vehicle carries as its stall.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self.0 != <$inner>::MAX
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                write!(f, "({})", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                Ok($name(<$inner>::try_from(index)?))
            }
        }
    };
}

typed_id! {
    /// Position of a vehicle in the input columns.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a charging stall; lower indices are preferred when several
    /// are free.
    pub struct StallId(u32);
}

impl StallId {
    /// Stall index as written to tabular output, `-1` for `INVALID`.
    pub fn as_signed(self) -> i64 {
        if self.is_valid() { i64::from(self.0) } else { -1 }
    }
}
