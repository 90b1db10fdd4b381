//! Developer tasks for the sandguard workspace.
//!
//! Currently this is JSON schema generation for the DTO surface hosts
//! integrate against; keeping it here leaves the library crates free of
//! tooling dependencies.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// A schema file under `schemas/` and the generator that produces it.
struct SchemaTarget {
    file: &'static str,
    render: fn() -> schemars::Schema,
}

const SCHEMA_TARGETS: [SchemaTarget; 3] = [
    SchemaTarget {
        file: "sandguard.symbol.v1.json",
        render: symbol_schema,
    },
    SchemaTarget {
        file: "sandguard.typeref.v1.json",
        render: type_ref_schema,
    },
    SchemaTarget {
        file: "sandguard.profile.v1.json",
        render: profile_schema,
    },
];

fn symbol_schema() -> schemars::Schema {
    schema_for!(sandguard_types::SymbolRef)
}

fn type_ref_schema() -> schemars::Schema {
    schema_for!(sandguard_types::TypeRef)
}

fn profile_schema() -> schemars::Schema {
    schema_for!(sandguard_settings::Profile)
}

/// The workspace root, one level above this crate's manifest.
fn workspace_root() -> anyhow::Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest directory has no parent")
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(workspace_root()?.join("schemas"))
}

/// Pretty-printed JSON with a trailing newline, the on-disk schema format.
fn render_json(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("schema did not serialize")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("could not create {}", dir.display()))?;

    for target in SCHEMA_TARGETS {
        let path = dir.join(target.file);
        let json = render_json(&(target.render)())?;
        fs::write(&path, &json)
            .with_context(|| format!("could not write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

/// Compare `schemas/` against freshly generated output. CI runs this so
/// schema edits never land without their source-type change (or vice versa).
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for target in SCHEMA_TARGETS {
        let path = dir.join(target.file);
        let generated = render_json(&(target.render)())?;
        match fs::read_to_string(&path) {
            Ok(on_disk) if on_disk == generated => {}
            Ok(_) => stale.push(format!("{} is out of date", target.file)),
            Err(_) => stale.push(format!("{} is missing", target.file)),
        }
    }

    if stale.is_empty() {
        println!("schemas are current");
        return Ok(());
    }
    for line in &stale {
        eprintln!("  {line}");
    }
    bail!("schema drift detected; run `cargo xtask emit-schemas`")
}

fn print_schema_ids() {
    for target in SCHEMA_TARGETS {
        println!("{}", target.file.trim_end_matches(".json"));
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               show this message");
    eprintln!("  emit-schemas       regenerate schemas/ from the DTO types");
    eprintln!("  validate-schemas   fail if schemas/ differs from generated output");
    eprintln!("  print-schema-ids   list the stable schema ids");
}

fn main() -> anyhow::Result<()> {
    let command = std::env::args().nth(1);
    match command.as_deref() {
        None | Some("help" | "--help" | "-h") => {
            print_help();
            Ok(())
        }
        Some("emit-schemas") => emit_schemas(),
        Some("validate-schemas") => validate_schemas(),
        Some("print-schema-ids") => {
            print_schema_ids();
            Ok(())
        }
        Some(other) => bail!("unknown xtask command `{other}`; run `cargo xtask help`"),
    }
}
