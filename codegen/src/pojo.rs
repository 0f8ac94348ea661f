use std::{
    fmt::{self, Write},
    path::Path,
};

use soap_to_rest_wsdl::types::Message;

use crate::{
    codegen::Codegen, error::Error, string_tools::capitalize, types::GeneratedFile, xsd::java_type,
};

pub const POJO_DIRECTORY: &str = "pojos";

/// One data holder class per WSDL message.
///
/// Names are used verbatim apart from capitalising the first character, so a
/// message name that is not a Java identifier yields a class that will not
/// compile, and two messages differing only in their first letter's case
/// share a file.
struct Pojo<'a>(&'a Message);

impl Pojo<'_> {
    fn class_name(&self) -> String {
        capitalize(&self.0.name)
    }
}

impl Codegen for Pojo<'_> {
    fn codegen<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "public class {} {{", self.class_name())?;

        for part in &self.0.parts {
            writeln!(out, "    private {} {};", java_type(&part.ty), part.name)?;
        }

        writeln!(out)?;

        for part in &self.0.parts {
            let ty = java_type(&part.ty);
            let field = &part.name;
            let accessor = capitalize(field);

            writeln!(
                out,
                "    public {} get{}() {{ return this.{}; }}",
                ty, accessor, field
            )?;
            writeln!(
                out,
                "    public void set{}({} {}) {{ this.{} = {}; }}",
                accessor, ty, field, field, field
            )?;
        }

        writeln!(out, "}}")
    }
}

pub fn pojos(messages: &[Message]) -> Result<Vec<GeneratedFile>, Error> {
    messages
        .iter()
        .map(|message| -> Result<GeneratedFile, Error> {
            let pojo = Pojo(message);
            let mut contents = String::new();
            pojo.codegen(&mut contents)?;

            let path = Path::new(POJO_DIRECTORY).join(format!("{}.java", pojo.class_name()));
            Ok(GeneratedFile::new(path, contents))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soap_to_rest_wsdl::types::MessagePart;

    fn message(name: &str, parts: &[(&str, Option<&str>)]) -> Message {
        Message {
            name: name.into(),
            parts: parts
                .iter()
                .map(|(name, ty)| MessagePart::new(name.to_string(), ty.map(str::to_owned)))
                .collect(),
        }
    }

    #[test]
    fn emits_fields_and_accessors() {
        let files = pojos(&[message(
            "AddRequest",
            &[("a", Some("xsd:int")), ("b", Some("xsd:int"))],
        )])
        .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, Path::new("pojos").join("AddRequest.java"));
        assert_eq!(
            files[0].contents,
            "public class AddRequest {\n\
             \x20   private int a;\n\
             \x20   private int b;\n\
             \n\
             \x20   public int getA() { return this.a; }\n\
             \x20   public void setA(int a) { this.a = a; }\n\
             \x20   public int getB() { return this.b; }\n\
             \x20   public void setB(int b) { this.b = b; }\n\
             }\n"
        );
    }

    #[test]
    fn empty_message_is_an_empty_class() {
        let files = pojos(&[message("ping", &[])]).unwrap();

        assert_eq!(files[0].path, Path::new("pojos").join("Ping.java"));
        assert_eq!(files[0].contents, "public class Ping {\n\n}\n");
    }

    #[test]
    fn untyped_part_becomes_string() {
        let files = pojos(&[message("Echo", &[("text", None)])]).unwrap();

        assert!(files[0].contents.contains("    private String text;\n"));
        assert!(files[0].contents.contains("    public String getText() { return this.text; }\n"));
        assert!(files[0]
            .contents
            .contains("    public void setText(String text) { this.text = text; }\n"));
    }

    #[test]
    fn keeps_message_order() {
        let files = pojos(&[message("B", &[]), message("a", &[])]).unwrap();
        let names = files
            .iter()
            .map(|file| file.path.file_name().unwrap().to_str().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["B.java", "A.java"]);
    }
}
