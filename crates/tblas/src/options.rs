//! Operation descriptors: layout, transpose, triangle, diagonal and side.
//!
//! Each descriptor is a transparent wrapper over its CBLAS integer code.
//! Values outside the legal set are representable (see [`Op::from_raw`] or the
//! `From<char>` conversions) so that argument validation can be exercised;
//! [`BlasOption::is_valid`] tells the two apart.
//!
//! ```
//! use tblas::{BlasOption, Op, Uplo};
//!
//! assert!(Op::from('C').is_valid());
//! assert_eq!(Op::from('c'), Op::ConjTrans);
//! assert!(!Uplo::from('x').is_valid());
//! assert_eq!(Uplo::Lower.raw(), 122);
//! ```

use std::fmt;

/// Common interface of the enumerated options.
pub trait BlasOption: Copy + Eq + fmt::Debug {
    /// Parameter name used when this option is reported invalid.
    const PARAM: &'static str;

    /// Whether the value is one of the legal codes.
    fn is_valid(self) -> bool;

    /// The raw CBLAS code.
    fn raw(self) -> u32;
}

macro_rules! blas_option {
    (
        $(#[$meta:meta])*
        $name:ident, $param:literal {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal, $ch:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        #[allow(non_upper_case_globals)]
        impl $name {
            $($(#[$vmeta])* pub const $variant: Self = Self($code);)+

            /// Wraps a raw code without validating it.
            pub const fn from_raw(code: u32) -> Self {
                Self(code)
            }

            /// The raw CBLAS code.
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Whether the value is one of the legal codes.
            pub const fn is_valid(self) -> bool {
                matches!(self.0, $($code)|+)
            }

            /// The reference-BLAS character for this value, `'?'` if invalid.
            pub const fn as_char(self) -> char {
                match self.0 {
                    $($code => $ch,)+
                    _ => '?',
                }
            }
        }

        impl BlasOption for $name {
            const PARAM: &'static str = $param;

            fn is_valid(self) -> bool {
                $name::is_valid(self)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<char> for $name {
            /// Parses the reference-BLAS character (case-insensitive); any
            /// other character yields an invalid value.
            fn from(ch: char) -> Self {
                match ch.to_ascii_uppercase() {
                    $($ch => Self::$variant,)+
                    _ => Self(0),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    $($code => f.write_str(stringify!($variant)),)+
                    other => write!(f, "{}({})", stringify!($name), other),
                }
            }
        }
    };
}

blas_option! {
    /// Storage order of a dense matrix.
    Layout, "layout" {
        RowMajor = 101, 'R';
        ColMajor = 102, 'C';
    }
}

blas_option! {
    /// Transpose applied to a matrix operand.
    Op, "trans" {
        NoTrans = 111, 'N';
        Trans = 112, 'T';
        ConjTrans = 113, 'C';
    }
}

blas_option! {
    /// Triangle of a symmetric, Hermitian or triangular matrix that is referenced.
    Uplo, "uplo" {
        Upper = 121, 'U';
        Lower = 122, 'L';
    }
}

blas_option! {
    /// Whether a triangular matrix has an implicit unit diagonal.
    Diag, "diag" {
        NonUnit = 131, 'N';
        Unit = 132, 'U';
    }
}

blas_option! {
    /// Side on which a matrix operand is applied.
    Side, "side" {
        Left = 141, 'L';
        Right = 142, 'R';
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::ColMajor
    }
}

impl Op {
    /// Whether the operand's logical shape is transposed.
    pub const fn is_transposed(self) -> bool {
        matches!(self.0, 112 | 113)
    }

    /// Whether elements are conjugated on read.
    pub const fn is_conjugated(self) -> bool {
        self.0 == 113
    }
}

impl Uplo {
    /// The opposite triangle; invalid values stay invalid.
    pub const fn flip(self) -> Self {
        match self.0 {
            121 => Uplo::Lower,
            122 => Uplo::Upper,
            _ => self,
        }
    }
}

impl Layout {
    /// The opposite storage order; invalid values stay invalid.
    pub const fn flip(self) -> Self {
        match self.0 {
            101 => Layout::ColMajor,
            102 => Layout::RowMajor,
            _ => self,
        }
    }
}
