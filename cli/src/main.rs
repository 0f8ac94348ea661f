use std::path::PathBuf;

use structopt::StructOpt;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use soap_to_rest_codegen::{self as codegen, types::TargetLanguage};
use soap_to_rest_util::{locator, output};
use soap_to_rest_wsdl as wsdl;

#[derive(Debug, Error)]
enum Error {
    #[error("Error parsing WSDL")]
    ParseError(#[from] wsdl::error::Error),

    #[error("Error generating REST scaffold")]
    CodegenError(#[from] codegen::error::Error),

    #[error("Error writing output")]
    OutputError(#[from] output::Error),

    #[error("Error")]
    IoError(#[from] std::io::Error),
}

/// Convert a SOAP project to a REST project scaffold.
#[derive(StructOpt)]
struct Args {
    /// Path to the SOAP project directory
    #[structopt(long = "soap_project", parse(from_os_str))]
    soap_project: PathBuf,

    /// Path to the WSDL file
    #[structopt(long)]
    wsdl: String,

    /// Target REST project language
    #[structopt(long = "target_language", possible_values = &TargetLanguage::VARIANTS)]
    target_language: TargetLanguage,

    /// Output directory for REST project
    #[structopt(long, parse(from_os_str))]
    output: PathBuf,
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    init_logging();

    println!("Parsing WSDL...");
    let definition = wsdl::parse(&args.wsdl)?;
    println!("Found services: [{}]", join(&definition.services));
    println!("Found operations: [{}]", definition.operations.join(", "));
    println!("Found SOAP endpoints: [{}]", join(&definition.soap_endpoints));

    println!("Scanning for business logic files...");
    let project_files = locator::list_files(&args.soap_project);
    let source_language = locator::detect_language(&project_files);
    tracing::info!(%source_language, "guessed SOAP project language");
    let logic_files = locator::select_language_files(project_files, source_language);
    println!(
        "Found business logic files: [{}]",
        logic_files
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let definition = codegen::preprocess(&definition);

    println!("Generating REST API scaffold...");
    output::create_dir(&args.output)?;
    let scaffold = codegen::scaffold(&definition, args.target_language)?;
    output::write_all(&args.output, &scaffold)?;
    println!("REST API scaffold generated at {}", args.output.display());

    if args.target_language == TargetLanguage::Java {
        println!("Generating POJOs from WSDL messages...");
        let pojo_dir = args.output.join(codegen::POJO_DIRECTORY);
        output::create_dir(&pojo_dir)?;
        output::write_all(&args.output, &codegen::pojos(&definition.messages)?)?;
        println!("POJOs generated in {}", pojo_dir.display());
    }

    let report = codegen::mapping_report(&definition, args.target_language, &logic_files)?;
    let report_path = output::write(&args.output, &report)?;
    println!("Mapping template generated at {}", report_path.display());

    Ok(())
}
