use crate::UrlError;
use regex::Regex;
use std::sync::LazyLock;

/// Optional scheme, optional `www.`, a host, a dot, a short TLD-like token and
/// an optional path/query tail.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("URL validation pattern is valid")
});

/// Checks whether a string looks like a fetchable web address
///
/// This is a purely syntactic check. It does not resolve the host or
/// verify that the TLD exists.
///
/// # Examples
///
/// ```
/// use pagescope::url::is_valid_url;
///
/// assert!(is_valid_url("doruk.com"));
/// assert!(is_valid_url("https://www.doruk.com/path"));
/// assert!(!is_valid_url("https://"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    URL_RE.is_match(input)
}

/// Validates raw user input before it is normalized and fetched
///
/// Surrounding whitespace is ignored. Returns the trimmed input on success.
///
/// # Returns
///
/// * `Ok(&str)` - The trimmed input, ready for normalization
/// * `Err(UrlError::Empty)` - Nothing was entered
/// * `Err(UrlError::Invalid)` - The input does not look like a URL
pub fn validate_input(input: &str) -> Result<&str, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    if !is_valid_url(trimmed) {
        return Err(UrlError::Invalid(trimmed.to_string()));
    }

    Ok(trimmed)
}
