use std::str::FromStr;

use crate::comparison::is_blank;

/// Parses an enum value from its name, falling back to `default`.
///
/// A blank or absent `value` yields `default`. A qualified name such as
/// `"Color.Red"` is reduced to the part after the last `.` before parsing.
/// Any parse failure yields `default`.
///
/// ```
/// # use commons_strings::parse_enum;
/// #[derive(Debug, PartialEq)]
/// enum Color { Red, Green }
///
/// impl std::str::FromStr for Color {
///     type Err = ();
///     fn from_str(s: &str) -> Result<Self, ()> {
///         match s {
///             "Red" => Ok(Color::Red),
///             "Green" => Ok(Color::Green),
///             _ => Err(()),
///         }
///     }
/// }
///
/// assert_eq!(parse_enum(Some("Color.Green"), Color::Red), Color::Green);
/// assert_eq!(parse_enum(Some("Blue"), Color::Red), Color::Red);
/// ```
pub fn parse_enum<E: FromStr>(value: Option<&str>, default: E) -> E {
    if is_blank(value) {
        return default;
    }
    let Some(name) = value else {
        return default;
    };
    let name = match name.rfind('.') {
        Some(pos) => &name[pos + 1..],
        None => name,
    };
    name.parse().unwrap_or(default)
}
