use std::fmt::{self, Write};

pub trait Codegen {
    fn codegen<W: Write>(&self, out: &mut W) -> fmt::Result;
}

pub fn codegen_all<W: Write>(all: &[impl Codegen], out: &mut W) -> fmt::Result {
    all.iter().try_for_each(|item| item.codegen(out))
}
