use std::{
    fmt::{self, Write},
    path::PathBuf,
};

use crate::{
    codegen::Codegen,
    error::Error,
    types::{Definition, GeneratedFile, TargetLanguage},
};

pub const REPORT_FILE: &str = "BUSINESS_LOGIC_MAPPING.txt";

const RULE: &str = "==============================";

static LEADING_STEPS: [&str; 3] = [
    "Review the generated REST API scaffold (app.py for Python, SoapRestController.java for Java).",
    "For each REST endpoint, copy or adapt the business logic from the corresponding SOAP method (see the business logic files listed above).",
    "Update input/output handling: REST uses JSON, so parse request bodies and return JSON responses as needed.",
];

static PYTHON_STEPS: [&str; 1] =
    ["Replace any SOAP client code with requests.post() or similar for REST calls."];

static JAVA_STEPS: [&str; 3] = [
    "Review the generated POJOs in the 'pojos' directory. Use them as request/response bodies in your REST endpoints.",
    "Replace any usage of WebServiceTemplate with RestTemplate for REST calls.",
    "Register the RestTemplate bean (see RestTemplateConfig.java).",
];

static TRAILING_STEPS: [&str; 2] = [
    "Test your new REST endpoints thoroughly.",
    "Remove or refactor any SOAP-specific code that is no longer needed.",
];

struct Report<'a> {
    definition: &'a Definition,
    target: TargetLanguage,
    logic_files: &'a [PathBuf],
}

impl Report<'_> {
    fn manual_steps(&self) -> impl Iterator<Item = &'static str> {
        let target_steps: &'static [&'static str] = match self.target {
            TargetLanguage::Python => &PYTHON_STEPS,
            TargetLanguage::Java => &JAVA_STEPS,
        };

        LEADING_STEPS
            .iter()
            .chain(target_steps)
            .chain(TRAILING_STEPS.iter())
            .copied()
    }
}

impl Codegen for Report<'_> {
    fn codegen<W: Write>(&self, out: &mut W) -> fmt::Result {
        let Definition {
            soap_endpoints,
            operations,
            ..
        } = self.definition;

        writeln!(out, "SOAP to REST Endpoint Mapping")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;

        if soap_endpoints.is_empty() {
            writeln!(out, "No SOAP endpoints found in WSDL.")?;
            writeln!(out)?;
        } else {
            writeln!(out, "SOAP Endpoints and their mapped REST endpoints:")?;
            writeln!(out)?;

            for endpoint in soap_endpoints {
                for operation in operations {
                    writeln!(out, "SOAP: {}", endpoint)?;
                    writeln!(out, "  -> REST: /{} (method: POST)", operation)?;
                    writeln!(out)?;
                }
            }
        }

        writeln!(
            out,
            "Map the following SOAP operations to REST endpoints manually as needed:"
        )?;
        writeln!(out)?;

        for operation in operations {
            writeln!(
                out,
                "- {}: Implement logic from corresponding SOAP method.",
                operation
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Refer to the following business logic files for reference:")?;

        for file in self.logic_files {
            writeln!(out, "- {}", file.display())?;
        }

        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Manual Steps for the User:")?;
        writeln!(out, "------------------------------")?;

        for (index, step) in self.manual_steps().enumerate() {
            writeln!(out, "{}. {}", index + 1, step)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", RULE)
    }
}

/// Renders `BUSINESS_LOGIC_MAPPING.txt`.
///
/// The manual steps are numbered consecutively for both targets, so Python
/// gets 1-6 where the older converter printed 1-4 and then 7-8.
pub fn mapping_report(
    definition: &Definition,
    target: TargetLanguage,
    logic_files: &[PathBuf],
) -> Result<GeneratedFile, Error> {
    let report = Report {
        definition,
        target,
        logic_files,
    };

    let mut contents = String::new();
    report.codegen(&mut contents)?;

    Ok(GeneratedFile::new(REPORT_FILE, contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessor::MISSING_ENDPOINT;
    use soap_to_rest_wsdl::types::SoapEndpoint;

    fn endpoint(location: &str) -> SoapEndpoint {
        SoapEndpoint {
            service: "Calc".into(),
            port: "CalcPort".into(),
            location: location.into(),
        }
    }

    fn definition(endpoints: Vec<SoapEndpoint>, operations: &[&str]) -> Definition {
        Definition {
            endpoint_url: endpoints
                .first()
                .map(|endpoint| endpoint.location.clone())
                .unwrap_or_else(|| MISSING_ENDPOINT.into()),
            soap_endpoints: endpoints,
            operations: operations.iter().map(|op| op.to_string()).collect(),
            messages: Vec::new(),
        }
    }

    #[test]
    fn pairs_every_endpoint_with_every_operation() {
        let definition = definition(
            vec![endpoint("http://x/one"), endpoint("http://x/two")],
            &["Add", "Sub"],
        );
        let report = mapping_report(&definition, TargetLanguage::Java, &[])
            .unwrap()
            .contents;

        assert_eq!(report.matches("  -> REST: ").count(), 4);
        assert!(report.contains(
            "SOAP: http://x/one (service: Calc, port: CalcPort)\n  -> REST: /Add (method: POST)\n\n\
             SOAP: http://x/one (service: Calc, port: CalcPort)\n  -> REST: /Sub (method: POST)\n\n\
             SOAP: http://x/two (service: Calc, port: CalcPort)\n  -> REST: /Add (method: POST)\n"
        ));
        assert!(!report.contains("No SOAP endpoints found"));
    }

    #[test]
    fn reports_missing_endpoints() {
        let report = mapping_report(&definition(Vec::new(), &["Add"]), TargetLanguage::Python, &[])
            .unwrap()
            .contents;

        assert!(report.contains("\nNo SOAP endpoints found in WSDL.\n"));
        assert!(!report.contains("-> REST"));
        assert!(report.contains("- Add: Implement logic from corresponding SOAP method.\n"));
    }

    #[test]
    fn lists_logic_files() {
        let files = vec![PathBuf::from("proj/a.py"), PathBuf::from("proj/pkg/b.py")];
        let report = mapping_report(&definition(Vec::new(), &[]), TargetLanguage::Python, &files)
            .unwrap()
            .contents;

        assert!(report.contains(
            "Refer to the following business logic files for reference:\n- proj/a.py\n- proj/pkg/b.py\n"
        ));
    }

    #[test]
    fn manual_steps_depend_on_target() {
        let definition = definition(vec![endpoint("http://x/calc")], &["Add"]);

        let python = mapping_report(&definition, TargetLanguage::Python, &[])
            .unwrap()
            .contents;
        assert!(python.contains("4. Replace any SOAP client code with requests.post()"));
        assert!(python.contains("6. Remove or refactor any SOAP-specific code"));
        assert!(!python.contains("POJOs"));
        assert!(!python.contains("7. "));

        let java = mapping_report(&definition, TargetLanguage::Java, &[])
            .unwrap()
            .contents;
        assert!(java.contains("4. Review the generated POJOs in the 'pojos' directory."));
        assert!(java.contains("6. Register the RestTemplate bean"));
        assert!(java.contains("8. Remove or refactor any SOAP-specific code"));
        assert!(!java.contains("requests.post()"));
        assert!(java.ends_with(&format!("\n\n{}\n", RULE)));
    }
}
