//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// Parsing is case-insensitive; unknown input is handed to the error
/// constructor.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     MyEnum,
///     RepofolioError::invalid_my_enum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variant-2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_ctor:path,
        { $($variant:ident => $str:literal),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::RepofolioError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok($enum_name::$variant),)+
                    _ => Err($error_ctor(s.to_string())),
                }
            }
        }
    };
}
