use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to convert provided URL to a path")]
    PathConversionError,

    #[error("Unable to open file")]
    FileOpenError(#[source] quick_xml::Error),

    #[error("Unsupported URL scheme {0}")]
    UnsupportedScheme(String),

    #[error("Error parsing XML input")]
    XmlParseError(#[from] quick_xml::Error),

    #[error("Closing tag </{0}> has no matching opening tag")]
    UnexpectedEndTag(String),

    #[error("Document ended with {0} unclosed element(s)")]
    UnclosedElements(usize),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Content found after the root element")]
    TrailingContent,

    #[error("Text found before the root element")]
    ContentBeforeRoot,

    #[error("Invalid element name {0}")]
    InvalidElementName(String),

    #[error("Namespace prefix {0} is not declared")]
    UnboundPrefix(String),

    #[error("Malformed attributes on element {0}")]
    MalformedAttributes(String),
}
