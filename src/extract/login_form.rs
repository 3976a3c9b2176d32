use super::NodeRef;
use scraper::Node;

const LOGIN_KEYWORDS: [&str; 3] = ["login", "signin", "auth"];

/// Detects whether the page contains a login form
///
/// A `<form>` counts when its `id` or `class` attribute contains `login`,
/// `signin` or `auth`, ignoring case. Stops at the first match.
pub fn detect_login_form(node: NodeRef<'_>) -> bool {
    if let Node::Element(element) = node.value() {
        if element.name() == "form" {
            let looks_like_login = ["id", "class"]
                .iter()
                .filter_map(|attr| element.attr(attr))
                .any(has_login_keyword);

            if looks_like_login {
                return true;
            }
        }
    }

    node.children().any(detect_login_form)
}

fn has_login_keyword(value: &str) -> bool {
    let value = value.to_lowercase();
    LOGIN_KEYWORDS.iter().any(|keyword| value.contains(keyword))
}
