use super::{element_name, NodeRef};
use scraper::Node;

/// Extracts the page title
///
/// Searches the tree in pre-order for `<title>` elements whose first child is
/// a text node, and returns the first one that is non-empty after trimming.
/// An empty or element-only `<title>` does not stop the search.
///
/// Returns an empty string when no such title exists; substituting a
/// placeholder is left to the caller.
pub fn extract_title(node: NodeRef<'_>) -> String {
    if element_name(&node) == Some("title") {
        if let Some(Node::Text(text)) = node.first_child().map(|child| child.value()) {
            let title = text.trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }

    for child in node.children() {
        let title = extract_title(child);
        if !title.is_empty() {
            return title;
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::parse;

    fn title_of(html: &str) -> String {
        let document = parse(html);
        extract_title(document.tree.root())
    }

    #[test]
    fn test_basic_title() {
        assert_eq!(
            title_of("<html><head><title>Test Title</title></head></html>"),
            "Test Title"
        );
    }

    #[test]
    fn test_title_with_whitespace() {
        assert_eq!(
            title_of("<html><head><title>  Test Title  </title></head></html>"),
            "Test Title"
        );
    }

    #[test]
    fn test_no_title() {
        assert_eq!(title_of("<html><head></head></html>"), "");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(title_of("<html><head><title></title></head></html>"), "");
    }

    #[test]
    fn test_first_title_wins() {
        let html = r#"<html><head><title>First</title></head>
            <body><svg><title>Second</title></svg></body></html>"#;
        assert_eq!(title_of(html), "First");
    }

    #[test]
    fn test_blank_title_skipped_for_later_one() {
        let html = r#"<html><head><title>   </title></head>
            <body><svg><title>Icon</title></svg></body></html>"#;
        assert_eq!(title_of(html), "Icon");
    }
}
