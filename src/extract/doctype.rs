use super::NodeRef;
use scraper::node::Doctype;
use scraper::Node;
use std::fmt;

/// Placeholder reported as the doctype text when a document has none
pub const NO_DOCTYPE: &str = "No DOCTYPE found";

/// Markup version derived from the document's doctype declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlVersion {
    /// `<!DOCTYPE html>`
    Html5,
    Html401Strict,
    Html401Transitional,
    Xhtml10,
    Xhtml11,
    /// A doctype was present but matched none of the known declarations
    Custom,
    /// No doctype node at all
    Unknown,
}

impl HtmlVersion {
    /// Classifies a doctype declaration
    ///
    /// The text is lower-cased and trimmed, then checked in this order
    /// (first match wins):
    ///
    /// | Rule | Version |
    /// |------|---------|
    /// | exactly `html` | HTML5 |
    /// | contains `html 4.01 strict` | HTML 4.01 Strict |
    /// | contains `html 4.01 transitional` | HTML 4.01 Transitional |
    /// | contains `xhtml 1.0` | XHTML 1.0 |
    /// | contains `xhtml 1.1` | XHTML 1.1 |
    /// | anything else | Unknown/Custom |
    pub fn from_doctype(declaration: &str) -> Self {
        let doctype = declaration.trim().to_lowercase();

        if doctype == "html" {
            Self::Html5
        } else if doctype.contains("html 4.01 strict") {
            Self::Html401Strict
        } else if doctype.contains("html 4.01 transitional") {
            Self::Html401Transitional
        } else if doctype.contains("xhtml 1.0") {
            Self::Xhtml10
        } else if doctype.contains("xhtml 1.1") {
            Self::Xhtml11
        } else {
            Self::Custom
        }
    }

    /// Human-readable version label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html5 => "HTML5",
            Self::Html401Strict => "HTML 4.01 Strict",
            Self::Html401Transitional => "HTML 4.01 Transitional",
            Self::Xhtml10 => "XHTML 1.0",
            Self::Xhtml11 => "XHTML 1.1",
            Self::Custom => "Unknown/Custom",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracts the markup version and the doctype declaration text
///
/// Uses the first doctype node found depth-first. Without one the result is
/// `(HtmlVersion::Unknown, "No DOCTYPE found")`.
pub fn extract_html_version(root: NodeRef<'_>) -> (HtmlVersion, String) {
    match find_doctype(root) {
        Some(doctype) => {
            let declaration = declaration_text(doctype);
            (HtmlVersion::from_doctype(&declaration), declaration)
        }
        None => (HtmlVersion::Unknown, NO_DOCTYPE.to_string()),
    }
}

fn find_doctype<'a>(node: NodeRef<'a>) -> Option<&'a Doctype> {
    if let Node::Doctype(doctype) = node.value() {
        return Some(doctype);
    }

    node.children().find_map(find_doctype)
}

/// Rebuilds the declaration as written between `<!DOCTYPE` and `>`
fn declaration_text(doctype: &Doctype) -> String {
    let name = doctype.name();
    let public_id = doctype.public_id();
    let system_id = doctype.system_id();

    let declaration = match (public_id.is_empty(), system_id.is_empty()) {
        (true, true) => name.to_string(),
        (false, true) => format!("{} PUBLIC \"{}\"", name, public_id),
        (false, false) => format!("{} PUBLIC \"{}\" \"{}\"", name, public_id, system_id),
        (true, false) => format!("{} SYSTEM \"{}\"", name, system_id),
    };

    declaration.trim().to_string()
}
