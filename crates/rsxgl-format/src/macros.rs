/// Declares a `#[repr(u32)]` token enum together with its raw-value conversions.
///
/// Every variant carries the numeric value used on the API boundary. The generated `from_raw`
/// mirrors a `match` over the raw word, so unknown values are rejected instead of transmuted.
macro_rules! raw_token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $err:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn from_raw(raw: u32) -> Option<Self> {
                Some(match raw {
                    $(x if x == $name::$variant as u32 => $name::$variant,)+
                    _ => return None,
                })
            }

            pub const fn as_raw(self) -> u32 {
                self as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::FormatError;

            fn try_from(raw: u32) -> Result<Self, Self::Error> {
                Self::from_raw(raw).ok_or($crate::FormatError::$err(raw))
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.as_raw()
            }
        }
    };
}
