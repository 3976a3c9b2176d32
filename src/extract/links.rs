use super::NodeRef;
use crate::url::extract_domain;
use scraper::Node;

/// Anchor counts by classification
///
/// Every `<a>` element lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    /// Relative links and absolute links on the page's own host
    pub internal: usize,
    /// Absolute links to another host
    pub external: usize,
    /// Anchors without a usable target: missing/empty href, fragments, `mailto:`
    pub inaccessible: usize,
}

impl LinkCounts {
    /// Total number of anchors seen
    pub fn total(&self) -> usize {
        self.internal + self.external + self.inaccessible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Internal,
    External,
    Inaccessible,
}

/// Classifies every anchor in the document against the page's base URL
///
/// # Classification Rules
///
/// | href (trimmed) | Bucket |
/// |----------------|--------|
/// | missing, empty, `#...`, `mailto:...` | inaccessible |
/// | starts with `http` and its host key contains the base host key | internal |
/// | starts with `http` otherwise | external |
/// | anything else (relative, `//host`, `tel:`, ...) | internal |
///
/// Host keys come from [`extract_domain`]. The comparison is a substring
/// test, so subdomains of the base host (and any host that merely contains
/// it) count as internal.
///
/// # Arguments
///
/// * `root` - Root of the parsed document
/// * `base_url` - The URL the page was fetched from
pub fn classify_links(root: NodeRef<'_>, base_url: &str) -> LinkCounts {
    let base_domain = extract_domain(base_url);
    let mut counts = LinkCounts::default();
    walk_anchors(root, &base_domain, &mut counts);
    counts
}

fn walk_anchors(node: NodeRef<'_>, base_domain: &str, counts: &mut LinkCounts) {
    if let Node::Element(element) = node.value() {
        if element.name() == "a" {
            let href = element.attr("href").unwrap_or("");
            match classify_href(href, base_domain) {
                LinkKind::Internal => counts.internal += 1,
                LinkKind::External => counts.external += 1,
                LinkKind::Inaccessible => counts.inaccessible += 1,
            }
        }
    }

    for child in node.children() {
        walk_anchors(child, base_domain, counts);
    }
}

fn classify_href(href: &str, base_domain: &str) -> LinkKind {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') || href.starts_with("mailto:") {
        return LinkKind::Inaccessible;
    }

    // Bare prefix check: "httpfoo" is treated as absolute too.
    if href.starts_with("http") {
        return if extract_domain(href).contains(base_domain) {
            LinkKind::Internal
        } else {
            LinkKind::External
        };
    }

    LinkKind::Internal
}
