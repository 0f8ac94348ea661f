use super::types;
use soap_to_rest_wsdl::types as wsdl;

pub const MISSING_ENDPOINT: &str = "[SOAP endpoint URL not found]";

pub fn preprocess(definition: &wsdl::Definition) -> types::Definition {
    let endpoint_url = if let Some(endpoint) = definition.soap_endpoints.first() {
        endpoint.location.clone()
    } else {
        tracing::debug!("no SOAP endpoint in WSDL, using placeholder");
        MISSING_ENDPOINT.to_owned()
    };

    types::Definition {
        endpoint_url,
        soap_endpoints: definition.soap_endpoints.clone(),
        operations: definition.operations.clone(),
        messages: definition.messages.clone(),
    }
}
