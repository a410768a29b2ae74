//! Macro for closed string sets accepted by the wallet API
//!
//! The remote service only understands a fixed vocabulary for filters and
//! form options. This macro turns such a vocabulary into an enum with a
//! stable wire string, a `Display` impl and a `FromStr` impl that rejects
//! anything outside the set with [`QiwiError::InvalidArgument`].
//!
//! # Example
//!
//! ```rust
//! use qiwi_domain::impl_closed_set;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Color {
//!     Red,
//!     Green,
//! }
//!
//! impl_closed_set!(Color {
//!     Red => "RED",
//!     Green => "GREEN",
//! });
//!
//! assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
//! assert!("red".parse::<Color>().is_err());
//! assert_eq!(Color::ALL.len(), 2);
//! ```
//!
//! [`QiwiError::InvalidArgument`]: crate::QiwiError::InvalidArgument

/// Implements `as_str`, `ALL`, `Display`, `FromStr` and `From<T> for String`
/// for a closed-set enum.
///
/// Parsing is exact: the wire values are case-sensitive.
#[macro_export]
macro_rules! impl_closed_set {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Wire representation.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::QiwiError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::QiwiError::InvalidArgument(format!(
                        "Unexpected {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }

        impl From<$enum_name> for String {
            fn from(value: $enum_name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}
