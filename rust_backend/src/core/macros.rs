/// Defines a categorical form field as a fieldless enum and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Hash)
/// - `ALL` in form presentation order
/// - `code()` returning the integer assigned at training time
/// - `as_str()` / `label()` for the submitted value and its display text
/// - `lookup()` for exact, case-sensitive parsing
/// - `Display`
///
/// Usage:
///   define_category!(Stops { Zero => ("zero", 0, "Zero"), ... });
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($value:literal, $code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(&self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn lookup(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
