//! Document metadata extractors
//!
//! Every extractor is a free function taking the root of a parsed document
//! tree and walking it depth-first. None of them keep state between calls or
//! mutate the tree, so they can run in any order against the same document.
//!
//! - [`extract_title`] - first non-empty `<title>`
//! - [`extract_html_version`] - doctype text and markup version
//! - [`extract_headings`] - `h1`..`h6` occurrence counts
//! - [`detect_login_form`] - keyword match on form `id`/`class`
//! - [`classify_links`] - internal / external / inaccessible anchors

mod doctype;
mod headings;
mod links;
mod login_form;
mod title;

pub use doctype::{extract_html_version, HtmlVersion, NO_DOCTYPE};
pub use headings::extract_headings;
pub use links::{classify_links, LinkCounts};
pub use login_form::detect_login_form;
pub use title::extract_title;

use scraper::Node;

/// A borrowed node of a parsed document tree
pub type NodeRef<'a> = ego_tree::NodeRef<'a, Node>;

/// Returns the element's tag name if the node is an element
fn element_name<'a>(node: &NodeRef<'a>) -> Option<&'a str> {
    match node.value() {
        Node::Element(element) => Some(element.name()),
        _ => None,
    }
}
