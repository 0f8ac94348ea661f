use std::fmt::{self, Write};

use crate::{
    codegen::{codegen_all, Codegen},
    error::Error,
    types::{Definition, GeneratedFile},
};

pub const APP_FILE: &str = "app.py";

const HEADER: &str = "\
from flask import Flask, request, jsonify
import requests
app = Flask(__name__)

# Example: If your SOAP project used a SOAP client, replace with REST calls using requests.post()
";

const FOOTER: &str = "\
if __name__ == '__main__':
    app.run(debug=True)
";

struct Route<'a> {
    endpoint_url: &'a str,
    operation: &'a str,
}

impl Codegen for Route<'_> {
    fn codegen<W: Write>(&self, out: &mut W) -> fmt::Result {
        let Route {
            endpoint_url,
            operation,
        } = self;

        writeln!(out, "# SOAP endpoint: {}", endpoint_url)?;
        writeln!(out, "# SOAP operation: {}", operation)?;
        writeln!(out, "@app.route('/{}', methods=['POST'])", operation)?;
        writeln!(out, "def {}():", operation)?;
        writeln!(out, "    # Example REST call (replace URL and payload as needed)")?;
        writeln!(
            out,
            "    # response = requests.post('http://rest-service/endpoint', json=request.json)"
        )?;
        writeln!(out, "    # return jsonify(response.json())")?;
        writeln!(out, "    # TODO: Implement logic for SOAP operation '{}' here", operation)?;
        writeln!(out, "    # You may parse request.json and return the appropriate response")?;
        writeln!(out, "    return jsonify({{'message': '{} endpoint'}})", operation)?;
        writeln!(out)
    }
}

pub fn scaffold(definition: &Definition) -> Result<Vec<GeneratedFile>, Error> {
    let routes = definition
        .operations
        .iter()
        .map(|operation| Route {
            endpoint_url: &definition.endpoint_url,
            operation,
        })
        .collect::<Vec<_>>();

    let mut app = String::from(HEADER);
    codegen_all(&routes, &mut app)?;
    app.push_str(FOOTER);

    Ok(vec![GeneratedFile::new(APP_FILE, app)])
}
