//! Macros for building the operation registry.

/// Define a closed set of binary operations.
///
/// Every entry names an enum variant, its registry name and the function body.
/// The body sees both operands under the given identifiers and returns a
/// `Result<f64, Error>`.
///
/// The generated enum gets `ALL`, `name`, `apply`, `Display` and `FromStr`
/// (which fails with `Error::InvalidOperation`).
macro_rules! define_operations {
    (
        $(#[$outer:meta])*
        $vis:vis enum $enum_name:ident {
            $(
                $(#[$inner:meta])*
                $variant:ident = $name:literal => |$a:ident, $b:ident| $body:expr,
            )*
        }
    ) => {
        $(#[$outer])*
        $vis enum $enum_name {
            $(
                $(#[$inner])*
                $variant,
            )*
        }

        impl $enum_name {
            /// All operations in registry order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The registry name of this operation.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Apply this operation to the operands `a` and `b`.
            pub fn apply(self, a: f64, b: f64) -> Result<f64, $crate::Error> {
                match self {
                    $(
                        Self::$variant => {
                            let ($a, $b) = (a, b);
                            $body
                        }
                    )*
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)*
                    _ => Err($crate::Error::InvalidOperation(s.to_string())),
                }
            }
        }
    };
}
