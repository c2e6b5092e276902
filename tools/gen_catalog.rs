//! Regenerates `crates/datafaker-core/src/catalog_gen.rs` from
//! `crates/datafaker-core/catalog/descriptors.json`.
//!
//! Run with `--check` to fail when the checked-in file is stale.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const MAX_LINE: usize = 100;

#[derive(Debug, Deserialize)]
struct Descriptor {
    name: String,
    description: String,
    group: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let check = std::env::args().skip(1).any(|arg| arg == "--check");
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or("missing repo root")?;
    let core = root.join("crates/datafaker-core");
    let source = core.join("catalog/descriptors.json");
    let target = core.join("src/catalog_gen.rs");

    let descriptors: Vec<Descriptor> = serde_json::from_str(&fs::read_to_string(&source)?)?;
    let rendered = render(&descriptors)?;

    if check {
        let current = fs::read_to_string(&target)?;
        if current != rendered {
            return Err(format!("{} is out of date", target.display()).into());
        }
        println!("{} is up to date", target.display());
        return Ok(());
    }

    fs::write(&target, rendered)?;
    println!("wrote {} descriptors to {}", descriptors.len(), target.display());
    Ok(())
}

fn render(descriptors: &[Descriptor]) -> Result<String, serde_json::Error> {
    let mut out = String::from(
        "// @generated by tools/gen_catalog.rs from catalog/descriptors.json. \
         Do not edit by hand.\n\n\
         use crate::descriptor::GeneratorDescriptor;\n\n\
         pub(crate) const DESCRIPTORS: &[GeneratorDescriptor] = &[\n",
    );
    for descriptor in descriptors {
        let name = serde_json::to_string(&descriptor.name)?;
        let description = serde_json::to_string(&descriptor.description)?;
        let group = serde_json::to_string(&descriptor.group)?;
        let single = format!("    GeneratorDescriptor::new({name}, {description}, {group}),");
        if single.chars().count() > MAX_LINE {
            out.push_str("    GeneratorDescriptor::new(\n");
            for literal in [&name, &description, &group] {
                out.push_str("        ");
                out.push_str(literal);
                out.push_str(",\n");
            }
            out.push_str("    ),\n");
        } else {
            out.push_str(&single);
            out.push('\n');
        }
    }
    out.push_str("];\n");
    Ok(out)
}
