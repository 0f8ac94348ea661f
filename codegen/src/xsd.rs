/// Maps a prefixed XSD type name (`xsd:int`) onto a Java primitive.
///
/// Only the text after the last colon is inspected. Unprefixed or unknown
/// types fall back to `String`.
pub fn java_type(xsd_type: &str) -> &'static str {
    match xsd_type.rsplit_once(':').map(|(_, local_name)| local_name) {
        Some("string") => "String",
        Some("int" | "integer") => "int",
        Some("boolean") => "boolean",
        Some("float" | "double") => "double",
        _ => "String",
    }
}
