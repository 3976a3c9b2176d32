/// Normalizes user input into an absolute URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. If the input already starts with `http://` or `https://`, keep it as is
/// 3. Otherwise prepend `https://`
///
/// The scheme check is case-sensitive. Host case, trailing slashes and
/// punycode are left untouched.
///
/// # Arguments
///
/// * `input` - The raw URL string supplied by the user
///
/// # Returns
///
/// The normalized URL string
///
/// # Examples
///
/// ```
/// use pagescope::url::normalize_url;
///
/// assert_eq!(normalize_url("  doruk.com "), "https://doruk.com");
/// assert_eq!(normalize_url("http://doruk.com"), "http://doruk.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }

    format!("https://{}", trimmed)
}
