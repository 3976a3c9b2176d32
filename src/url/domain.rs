/// Extracts the host comparison key from a URL string
///
/// The URL is lower-cased, a leading `https://` or `http://` is stripped,
/// then a leading `www.`, and the result is cut at the first `/` or `?`.
/// A port, if present, stays part of the key.
///
/// This works on raw strings on purpose: hrefs found in pages are often not
/// parseable as absolute URLs, and the link classifier only needs a
/// substring key.
///
/// # Examples
///
/// ```
/// use pagescope::url::extract_domain;
///
/// assert_eq!(extract_domain("https://www.Doruk.com/path"), "doruk.com");
/// assert_eq!(extract_domain("https://doruk.com:8080/path"), "doruk.com:8080");
/// ```
pub fn extract_domain(url: &str) -> String {
    let lowered = url.to_lowercase();

    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);

    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);

    let end = without_www
        .find(['/', '?'])
        .unwrap_or(without_www.len());

    without_www[..end].to_string()
}
