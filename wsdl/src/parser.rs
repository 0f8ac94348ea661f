use quick_xml::{
    events::{attributes::Attributes, BytesStart, BytesText, Event},
    Reader,
};
use std::{io::BufRead, path::Path};
use tracing::{debug, trace};

use super::{
    error,
    types::{
        Definition, Message, MessagePart, Service, SoapEndpoint, SOAP_NAMESPACE, WSDL_NAMESPACE,
    },
};

fn get_attributes<B: BufRead, const N: usize>(
    reader: &Reader<B>,
    attributes: Attributes<'_>,
    names: [&'static str; N],
) -> Result<[Option<String>; N], error::Error> {
    const INIT: Option<String> = None;
    let mut result = [INIT; N];

    for attribute in attributes {
        let attribute = attribute?;
        let key = reader.decode(attribute.key)?;

        for (index, name) in names.iter().enumerate() {
            if key == *name {
                let value = attribute.unescaped_value()?;
                result[index] = Some(reader.decode(&value)?.to_owned());
                break;
            }
        }
    }

    Ok(result)
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b':' || !byte.is_ascii()
}

/// Checks the attribute section of a start tag: `name="value"` pairs separated
/// by whitespace, quoted values without `<`.
fn check_attribute_syntax(name: &str, mut rest: &[u8]) -> Result<(), error::Error> {
    let malformed = || error::Error::MalformedAttributes(name.to_owned());

    loop {
        let trimmed = rest.iter().position(|b| !b.is_ascii_whitespace());
        let separated = trimmed != Some(0);

        rest = match trimmed {
            Some(index) => &rest[index..],
            None => return Ok(()),
        };

        if !separated || !is_name_start(rest[0]) {
            return Err(malformed());
        }

        let name_end = rest
            .iter()
            .position(|b| b.is_ascii_whitespace() || *b == b'=')
            .ok_or_else(malformed)?;
        rest = &rest[name_end..];

        let equals = rest
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .ok_or_else(malformed)?;
        if rest[equals] != b'=' {
            return Err(malformed());
        }
        rest = &rest[equals + 1..];

        let quote_start = rest
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .ok_or_else(malformed)?;
        let quote = rest[quote_start];
        if quote != b'"' && quote != b'\'' {
            return Err(malformed());
        }
        rest = &rest[quote_start + 1..];

        let value_end = rest.iter().position(|b| *b == quote).ok_or_else(malformed)?;
        if rest[..value_end].contains(&b'<') {
            return Err(malformed());
        }
        rest = &rest[value_end + 1..];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Namespace {
    Wsdl,
    Soap,
    Other,
}

impl Namespace {
    fn from_bytes(namespace: Option<&[u8]>) -> Self {
        match namespace {
            Some(ns) if ns == WSDL_NAMESPACE.as_bytes() => Namespace::Wsdl,
            Some(ns) if ns == SOAP_NAMESPACE.as_bytes() => Namespace::Soap,
            _ => Namespace::Other,
        }
    }
}

#[derive(Debug)]
enum ParseState {
    Definitions,

    Service {
        name: String,
        ports: Vec<String>,
    },
    Port {
        name: String,
        address_seen: bool,
        location: Option<String>,
    },
    Address,

    PortType,
    Operation {
        name: String,
    },

    Message {
        name: String,
        parts: Vec<MessagePart>,
    },
    Part {
        name: String,
        ty: Option<String>,
    },

    Other(String),
}

#[derive(Default)]
struct Parser {
    definition: Definition,
    root_seen: bool,
    root_closed: bool,
}

impl Parser {
    fn parse_xml<B: BufRead>(mut self, mut reader: Reader<B>) -> Result<Definition, error::Error> {
        reader.trim_text(true);

        let mut stack = Vec::new();
        let mut buffer = Vec::new();
        let mut namespace_buffer = Vec::new();

        loop {
            let (namespace, event) =
                reader.read_namespaced_event(&mut buffer, &mut namespace_buffer)?;

            match event {
                Event::Start(start) => self.handle_start(&mut stack, &reader, &start, namespace)?,
                Event::End(end) => self.handle_end(&mut stack, reader.decode(end.name())?)?,

                Event::Empty(start) => {
                    self.handle_start(&mut stack, &reader, &start, namespace)?;
                    self.handle_end(&mut stack, reader.decode(start.name())?)?;
                }

                Event::Text(text) => self.handle_text(&stack, &reader, &text)?,

                Event::Eof => break,

                event => trace!(?event, "ignoring event"),
            }

            buffer.clear();
        }

        if !stack.is_empty() {
            return Err(error::Error::UnclosedElements(stack.len()));
        }

        if !self.root_seen {
            return Err(error::Error::MissingRoot);
        }

        debug!(
            services = self.definition.services.len(),
            endpoints = self.definition.soap_endpoints.len(),
            operations = self.definition.operations.len(),
            messages = self.definition.messages.len(),
            "finished parsing WSDL"
        );

        Ok(self.definition)
    }

    fn handle_start<B: BufRead>(
        &mut self,
        stack: &mut Vec<ParseState>,
        reader: &Reader<B>,
        start: &BytesStart<'_>,
        namespace: Option<&[u8]>,
    ) -> Result<(), error::Error> {
        let qualified_name = reader.decode(start.name())?;
        let local_name = reader.decode(start.local_name())?;

        if !qualified_name.bytes().next().map_or(false, is_name_start) {
            return Err(error::Error::InvalidElementName(qualified_name.to_owned()));
        }

        if let Some((prefix, _)) = qualified_name.split_once(':') {
            if namespace.is_none() && prefix != "xml" {
                return Err(error::Error::UnboundPrefix(prefix.to_owned()));
            }
        }

        check_attribute_syntax(qualified_name, &start[start.name().len()..])?;

        for attribute in start.attributes() {
            let attribute = attribute?;
            reader.decode(attribute.key)?;
            reader.decode(&attribute.unescaped_value()?)?;
        }

        let namespace = Namespace::from_bytes(namespace);
        let mut new_state = ParseState::Other(local_name.to_owned());

        match stack.last_mut() {
            None => {
                if self.root_closed {
                    return Err(error::Error::TrailingContent);
                }

                self.root_seen = true;
                new_state = ParseState::Definitions;
            }

            Some(ParseState::Definitions) => match (namespace, local_name) {
                (Namespace::Wsdl, "service") => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Service {
                        name: name.unwrap_or_default(),
                        ports: Vec::new(),
                    };
                }

                (Namespace::Wsdl, "portType") => new_state = ParseState::PortType,

                (Namespace::Wsdl, "message") => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Message {
                        name: name.unwrap_or_default(),
                        parts: Vec::new(),
                    };
                }

                _ => trace!("found {} inside definitions block", local_name),
            },

            Some(ParseState::Service { .. }) => match (namespace, local_name) {
                (Namespace::Wsdl, "port") => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Port {
                        name: name.unwrap_or_default(),
                        address_seen: false,
                        location: None,
                    };
                }

                _ => trace!("found {} inside service block", local_name),
            },

            Some(ParseState::Port {
                address_seen,
                location,
                ..
            }) => match (namespace, local_name) {
                (Namespace::Soap, "address") => {
                    // Only the first SOAP address of a port counts
                    if !*address_seen {
                        let [found] = get_attributes(reader, start.attributes(), ["location"])?;

                        *address_seen = true;
                        *location = found;
                    }

                    new_state = ParseState::Address;
                }

                _ => trace!("found {} inside port block", local_name),
            },

            Some(ParseState::PortType) => match (namespace, local_name) {
                (Namespace::Wsdl, "operation") => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Operation {
                        name: name.unwrap_or_default(),
                    };
                }

                _ => trace!("found {} inside port type block", local_name),
            },

            Some(ParseState::Message { .. }) => match (namespace, local_name) {
                (Namespace::Wsdl, "part") => {
                    let [name, ty] = get_attributes(reader, start.attributes(), ["name", "type"])?;

                    new_state = ParseState::Part {
                        name: name.unwrap_or_default(),
                        ty,
                    };
                }

                _ => trace!("found {} inside message block", local_name),
            },

            Some(ParseState::Address | ParseState::Operation { .. } | ParseState::Part { .. }) => {
                trace!("found {} inside leaf block", local_name)
            }

            Some(ParseState::Other(name)) => trace!("found {} inside {} block", local_name, name),
        }

        stack.push(new_state);
        Ok(())
    }

    fn handle_end(
        &mut self,
        stack: &mut Vec<ParseState>,
        name: &str,
    ) -> Result<(), error::Error> {
        let finished_state = stack
            .pop()
            .ok_or_else(|| error::Error::UnexpectedEndTag(name.to_owned()))?;

        match finished_state {
            ParseState::Service { name, ports } => {
                self.definition.services.push(Service { name, ports })
            }

            ParseState::Port { name, location, .. } => {
                if let Some(ParseState::Service {
                    name: service,
                    ports,
                }) = stack.last_mut()
                {
                    if let Some(location) = location.filter(|location| !location.is_empty()) {
                        self.definition.soap_endpoints.push(SoapEndpoint {
                            service: service.clone(),
                            port: name.clone(),
                            location,
                        });
                    }

                    ports.push(name);
                }
            }

            ParseState::Operation { name } => self.definition.operations.push(name),

            ParseState::Message { name, parts } => {
                self.definition.messages.push(Message { name, parts })
            }

            ParseState::Part { name, ty } => {
                if let Some(ParseState::Message { parts, .. }) = stack.last_mut() {
                    parts.push(MessagePart::new(name, ty));
                }
            }

            ParseState::Definitions
            | ParseState::PortType
            | ParseState::Address
            | ParseState::Other(_) => (),
        }

        if stack.is_empty() {
            self.root_closed = true;
        }

        Ok(())
    }

    fn handle_text<B: BufRead>(
        &self,
        stack: &[ParseState],
        reader: &Reader<B>,
        text: &BytesText<'_>,
    ) -> Result<(), error::Error> {
        let unescaped = text.unescaped()?;
        let text = reader.decode(&unescaped)?;

        if !stack.is_empty() || text.trim_start_matches('\u{feff}').trim().is_empty() {
            Ok(())
        } else if self.root_closed {
            Err(error::Error::TrailingContent)
        } else {
            Err(error::Error::ContentBeforeRoot)
        }
    }
}

pub fn parse_file(path: &Path) -> Result<Definition, error::Error> {
    debug!(path = %path.display(), "parsing WSDL file");

    let reader = Reader::from_file(path).map_err(error::Error::FileOpenError)?;
    Parser::default().parse_xml(reader)
}

pub fn parse_str(xml: &str) -> Result<Definition, error::Error> {
    Parser::default().parse_xml(Reader::from_str(xml))
}
