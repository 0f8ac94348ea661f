use std::path::{Path, PathBuf};
use url::Url;

mod parser;

pub mod error;
pub mod types;

/// Parses the WSDL document at `location`, which may be a filesystem path or
/// a `file://` URL.
pub fn parse<S: AsRef<str>>(location: S) -> Result<types::Definition, error::Error> {
    let location = location.as_ref();

    let path = match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|()| error::Error::PathConversionError)?,

        // Single letter schemes are Windows drive letters, and an existing
        // file such as `v1:svc.wsdl` is a path rather than a URL
        Ok(url) if url.scheme().len() > 1 && !Path::new(location).exists() => {
            return Err(error::Error::UnsupportedScheme(url.scheme().into()))
        }

        _ => PathBuf::from(location),
    };

    parse_file(path)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<types::Definition, error::Error> {
    parser::parse_file(path.as_ref())
}

pub fn parse_str(xml: &str) -> Result<types::Definition, error::Error> {
    parser::parse_str(xml)
}
