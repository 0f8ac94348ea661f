use std::fmt;

pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";
pub const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/soap/";

/// Type recorded for a message part that carries no `type` attribute.
pub const DEFAULT_PART_TYPE: &str = "string";

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub ports: Vec<String>,
}

/// A port that carries a SOAP address, together with its enclosing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEndpoint {
    pub service: String,
    pub port: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePart {
    pub name: String,
    /// Prefixed XSD type name, e.g. `xsd:int`. Never empty.
    pub ty: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub parts: Vec<MessagePart>,
}

/// Everything extracted from a single WSDL document.
///
/// All lists keep document order. `operations` is flattened across every
/// `portType` and is not deduplicated; nothing ties an operation to a message.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub services: Vec<Service>,
    pub soap_endpoints: Vec<SoapEndpoint>,
    pub operations: Vec<String>,
    pub messages: Vec<Message>,
}

impl MessagePart {
    pub fn new(name: String, ty: Option<String>) -> Self {
        Self {
            name,
            ty: ty
                .filter(|ty| !ty.is_empty())
                .unwrap_or_else(|| DEFAULT_PART_TYPE.to_owned()),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ports: {})", self.name, self.ports.join(", "))
    }
}

impl fmt::Display for SoapEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (service: {}, port: {})",
            self.location, self.service, self.port
        )
    }
}
