use std::{fmt, path::PathBuf, str::FromStr};

use soap_to_rest_wsdl::types::{Message, SoapEndpoint};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    /// Flask application
    Python,
    /// Spring controller, RestTemplate configuration and POJOs
    Java,
}

/// WSDL data with every fallback already applied, ready for emission.
#[derive(Debug, Clone)]
pub struct Definition {
    /// First SOAP endpoint location, or a placeholder when the WSDL had none.
    pub endpoint_url: String,
    pub soap_endpoints: Vec<SoapEndpoint>,
    pub operations: Vec<String>,
    pub messages: Vec<Message>,
}

/// A file to be written, with its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl TargetLanguage {
    pub const VARIANTS: [&'static str; 2] = ["python", "java"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "python",
            TargetLanguage::Java => "java",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(TargetLanguage::Python),
            "java" => Ok(TargetLanguage::Java),
            other => Err(Error::UnknownTargetLanguage(other.to_owned())),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeneratedFile {
    pub fn new<P: Into<PathBuf>>(path: P, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}
