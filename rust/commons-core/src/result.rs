pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns `InvalidArgument` from the enclosing function when `expr` is false.
///
/// ```
/// # use commons_core::{verify_arg, Result};
/// fn page(page_size: usize) -> Result<usize> {
///     verify_arg!(page_size, page_size > 0);
///     Ok(page_size)
/// }
/// assert!(page(0).is_err());
/// assert_eq!(page(4).unwrap(), 4);
/// ```
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}
