//! Macro for implementing Display and FromStr for wire status enums
//!
//! Convoy sends statuses as capitalised strings (`"Success"`, `"Failure"`).
//! The macro keeps the wire spelling for `Display` and parses
//! case-insensitively so CLI input like `success` is accepted.
//!
//! # Example
//!
//! ```rust
//! use convoy_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum EndpointStatus {
//!     Active,
//!     Paused,
//! }
//!
//! impl_domain_status_conversions!(EndpointStatus {
//!     Active => "active",
//!     Paused => "paused",
//! });
//!
//! assert_eq!("ACTIVE".parse::<EndpointStatus>(), Ok(EndpointStatus::Active));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
