use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use structopt::StructOpt;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use avrogen_core::{GeneratedDocuments, SchemaDocument, TranslateRecord};
use avrogen_emitter_csharp::CsharpRecordEmitter;

const SCHEMA_SUFFIX: &str = "avsc";

#[derive(Debug, StructOpt)]
#[structopt(name = "avrogen", about = "Generates C# record types from Avro schemas.")]
struct Opt {
    /// Schema files, or directories searched for `.avsc` files.
    #[structopt(parse(from_os_str))]
    inputs: Vec<PathBuf>,

    /// Directory that receives the generated sources.
    #[structopt(short = "o", long = "out-dir", parse(from_os_str), default_value = "generated")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Opt::from_args();

    let documents = collect_documents(&opt.inputs)?;
    let emitter = CsharpRecordEmitter;
    let mut generated = GeneratedDocuments::new();

    for document in &documents {
        let report = emitter.translate_with_report(document);

        for skipped in &report.skipped_fields {
            warn!(
                document = document.name.as_str(),
                field = skipped.field.as_str(),
                declared_type = skipped.declared_type.as_str(),
                "field has no C# mapping; dropped from the generated type"
            );
        }

        match report.document {
            Some(artifact) => {
                info!(
                    document = document.name.as_str(),
                    artifact = artifact.artifact_name.as_str(),
                    "generated"
                );
                generated.register(artifact);
            }
            None => debug!(
                document = document.name.as_str(),
                "not generation-worthy; skipped"
            ),
        }
    }

    fs::create_dir_all(&opt.out_dir)
        .with_context(|| format!("Failed to create {}", opt.out_dir.display()))?;

    for (artifact_name, artifact) in generated {
        let path = opt.out_dir.join(&artifact_name);
        fs::write(&path, artifact.source_text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

/// Gathers the eligible schema documents: the named files, plus any
/// `.avsc` files found one level inside the named directories.
fn collect_documents(inputs: &[PathBuf]) -> anyhow::Result<Vec<SchemaDocument>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            for entry in entries {
                let path = entry?.path();

                if has_schema_suffix(&path) {
                    paths.push(path);
                }
            }
        } else {
            paths.push(input.clone());
        }
    }

    paths.sort();

    let mut documents = Vec::new();

    for path in paths {
        if !has_schema_suffix(&path) {
            debug!(path = %path.display(), "not a schema file; skipped");
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        documents.push(SchemaDocument::new(name, content));
    }

    Ok(documents)
}

fn has_schema_suffix(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension == SCHEMA_SUFFIX)
        .unwrap_or(false)
}
