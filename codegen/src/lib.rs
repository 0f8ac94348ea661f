use std::path::PathBuf;

use soap_to_rest_wsdl::types::{self as wsdl, Message};

mod codegen;
mod flask;
mod pojo;
mod preprocessor;
mod report;
mod spring;
mod string_tools;

pub mod error;
pub mod types;
pub mod xsd;

pub use flask::APP_FILE;
pub use pojo::POJO_DIRECTORY;
pub use preprocessor::MISSING_ENDPOINT;
pub use report::REPORT_FILE;
pub use spring::{CONFIG_FILE, CONTROLLER_FILE};

use types::{Definition, GeneratedFile, TargetLanguage};

/// Applies the extraction defaults, leaving every generator a pure function of
/// a fully populated [`Definition`].
pub fn preprocess(definition: &wsdl::Definition) -> Definition {
    preprocessor::preprocess(definition)
}

/// Endpoint stubs for `target`, one handler per operation in WSDL order.
pub fn scaffold(
    definition: &Definition,
    target: TargetLanguage,
) -> Result<Vec<GeneratedFile>, error::Error> {
    match target {
        TargetLanguage::Python => flask::scaffold(definition),
        TargetLanguage::Java => spring::scaffold(definition),
    }
}

/// Java data holders under [`POJO_DIRECTORY`], one per message.
pub fn pojos(messages: &[Message]) -> Result<Vec<GeneratedFile>, error::Error> {
    pojo::pojos(messages)
}

pub fn mapping_report(
    definition: &Definition,
    target: TargetLanguage,
    logic_files: &[PathBuf],
) -> Result<GeneratedFile, error::Error> {
    report::mapping_report(definition, target, logic_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soap_to_rest_wsdl::types::{MessagePart, SoapEndpoint};

    fn calc() -> wsdl::Definition {
        wsdl::Definition {
            services: vec![wsdl::Service {
                name: "Calc".into(),
                ports: vec!["CalcPort".into()],
            }],
            soap_endpoints: vec![SoapEndpoint {
                service: "Calc".into(),
                port: "CalcPort".into(),
                location: "http://x/calc".into(),
            }],
            operations: vec!["Add".into()],
            messages: vec![Message {
                name: "AddRequest".into(),
                parts: vec![
                    MessagePart::new("a".into(), Some("xsd:int".into())),
                    MessagePart::new("b".into(), Some("xsd:int".into())),
                ],
            }],
        }
    }

    #[test]
    fn scaffold_file_sets_per_target() {
        let definition = preprocess(&calc());

        let python = scaffold(&definition, TargetLanguage::Python).unwrap();
        assert_eq!(
            python.iter().map(|f| f.path.clone()).collect::<Vec<_>>(),
            vec![PathBuf::from(APP_FILE)]
        );

        let java = scaffold(&definition, TargetLanguage::Java).unwrap();
        assert_eq!(
            java.iter().map(|f| f.path.clone()).collect::<Vec<_>>(),
            vec![PathBuf::from(CONTROLLER_FILE), PathBuf::from(CONFIG_FILE)]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let definition = preprocess(&calc());

        for target in [TargetLanguage::Python, TargetLanguage::Java] {
            assert_eq!(
                scaffold(&definition, target).unwrap(),
                scaffold(&definition, target).unwrap()
            );
            assert_eq!(
                mapping_report(&definition, target, &[]).unwrap(),
                mapping_report(&definition, target, &[]).unwrap()
            );
        }

        assert_eq!(
            pojos(&definition.messages).unwrap(),
            pojos(&definition.messages).unwrap()
        );
    }

    #[test]
    fn handler_count_matches_operations() {
        let mut wsdl = calc();
        wsdl.operations = vec!["Add".into(), "Sub".into(), "Add".into()];
        let definition = preprocess(&wsdl);

        let java = scaffold(&definition, TargetLanguage::Java).unwrap();
        assert_eq!(java[0].contents.matches("@PostMapping(").count(), 3);

        let python = scaffold(&definition, TargetLanguage::Python).unwrap();
        assert_eq!(python[0].contents.matches("@app.route(").count(), 3);
    }
}
