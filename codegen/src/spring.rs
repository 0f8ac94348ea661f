use std::fmt::{self, Write};

use crate::{
    codegen::{codegen_all, Codegen},
    error::Error,
    types::{Definition, GeneratedFile},
};

pub const CONTROLLER_FILE: &str = "SoapRestController.java";
pub const CONFIG_FILE: &str = "RestTemplateConfig.java";

const CONTROLLER_HEADER: &str = "\
import org.springframework.web.bind.annotation.*;
import org.springframework.web.client.RestTemplate;
import org.springframework.beans.factory.annotation.Autowired;

@RestController
public class SoapRestController {

    // Example: If your SOAP project used WebServiceTemplate, use RestTemplate for REST calls
    @Autowired
    private RestTemplate restTemplate;

";

const REST_TEMPLATE_CONFIG: &str = "\
import org.springframework.context.annotation.Bean;
import org.springframework.context.annotation.Configuration;
import org.springframework.web.client.RestTemplate;

@Configuration
public class RestTemplateConfig {
    @Bean
    public RestTemplate restTemplate() {
        return new RestTemplate();
    }
}
";

struct Handler<'a> {
    endpoint_url: &'a str,
    operation: &'a str,
}

impl Codegen for Handler<'_> {
    fn codegen<W: Write>(&self, out: &mut W) -> fmt::Result {
        let Handler {
            endpoint_url,
            operation,
        } = self;

        writeln!(out, "    // SOAP endpoint: {}", endpoint_url)?;
        writeln!(out, "    // SOAP operation: {}", operation)?;
        writeln!(out, "    @PostMapping(\"/{}\")", operation)?;
        writeln!(out, "    public String {}(@RequestBody String requestBody) {{", operation)?;
        writeln!(out, "        // Example REST call (replace URL and payload as needed)")?;
        writeln!(
            out,
            "        // String response = restTemplate.postForObject(\"http://rest-service/endpoint\", requestBody, String.class);"
        )?;
        writeln!(out, "        // return response;")?;
        writeln!(out, "        // TODO: Implement logic for SOAP operation '{}' here", operation)?;
        writeln!(out, "        return \"{} endpoint\";", operation)?;
        writeln!(out, "    }}")?;
        writeln!(out)
    }
}

/// Emits the controller followed by the RestTemplate configuration, which is
/// written whether or not the WSDL named an endpoint.
pub fn scaffold(definition: &Definition) -> Result<Vec<GeneratedFile>, Error> {
    let handlers = definition
        .operations
        .iter()
        .map(|operation| Handler {
            endpoint_url: &definition.endpoint_url,
            operation,
        })
        .collect::<Vec<_>>();

    let mut controller = String::from(CONTROLLER_HEADER);
    codegen_all(&handlers, &mut controller)?;
    controller.push_str("}\n");

    Ok(vec![
        GeneratedFile::new(CONTROLLER_FILE, controller),
        GeneratedFile::new(CONFIG_FILE, REST_TEMPLATE_CONFIG.to_owned()),
    ])
}
