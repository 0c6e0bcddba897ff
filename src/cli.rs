//! Minimal CLI: ingest → (models | apis | context)
use clap::{Args, Parser, Subcommand};
use anyhow::Context as _;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::ir::{OperationDesc, SchemaDesc};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// resolve OpenAPI/Swagger documents into the renderable model tree for the
/// boost-beast client templates
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// resolve named schemas and print the generated-model tree
    Models(ModelsOut),
    /// resolve operations grouped by tag and print the generated-api tree
    Apis(ApisOut),
    /// print the full render context (models + apis + namespace values)
    Context(ContextOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// JQ pre-process filter for each document.
    #[arg(long)]
    jq_expr: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct GeneratorSettings {
    /// C++ namespace (convention: name::space::for::api)
    #[arg(long, default_value = "Swagger::Model")]
    namespace: String,

    /// prefix for generated model/api type names
    #[arg(long, default_value = "SWG")]
    prefix: String,

    /// api version threaded through to the templates
    #[arg(long, default_value = "1.0.0")]
    api_version: String,
}

#[derive(clap::Parser, Debug)]
struct ModelsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generator_settings: GeneratorSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct ApisOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generator_settings: GeneratorSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct ContextOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generator_settings: GeneratorSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GeneratorSettings {
    fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            namespace: self.namespace.clone(),
            model_name_prefix: self.prefix.clone(),
            api_version: self.api_version.clone(),
            ..GeneratorConfig::default()
        }
    }
}

impl InputSettings {
    fn load_documents(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let mut docs = Vec::new();
        for source_path in source_paths {
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {}", source_path.display()))?;
            let value = serde_json::from_str::<serde_json::Value>(&source)
                .with_context(|| format!("failed to parse JSON in {}", source_path.display()))?;
            match self.jq_expr.as_deref() {
                None => docs.push(value),
                Some(expr) => docs.extend(
                    crate::jq_exec::apply_filter(expr, &value).with_context(|| {
                        format!("failed to apply jq filter to {}", source_path.display())
                    })?,
                ),
            }
        }
        Ok(docs)
    }

    /// Accumulate schemas and operations across every input document.
    fn load_descriptors(&self) -> anyhow::Result<(Vec<SchemaDesc>, Vec<OperationDesc>)> {
        let mut schemas = Vec::new();
        let mut ops = Vec::new();
        for doc in self.load_documents()? {
            let (s, o) = crate::ingest::ingest_document(&doc)?;
            schemas.extend(s);
            ops.extend(o);
        }
        Ok((schemas, ops))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Models(target) => {
                let (schemas, _) = target.input_settings.load_descriptors()?;
                let cfg = target.generator_settings.to_config();
                let models = crate::lower::lower_models(&cfg, &schemas)?;
                write_json(&target.out, &models)
            }
            Command::Apis(target) => {
                let (_, ops) = target.input_settings.load_descriptors()?;
                let cfg = target.generator_settings.to_config();
                let apis = crate::lower::lower_apis(&cfg, &ops)?;
                write_json(&target.out, &apis)
            }
            Command::Context(target) => {
                let (schemas, ops) = target.input_settings.load_descriptors()?;
                let cfg = target.generator_settings.to_config();
                let context = crate::lower::render_context(&cfg, &schemas, &ops)?;
                write_json(&target.out, &context)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_json<T: serde::Serialize>(out: &Option<PathBuf>, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            // Treat as a glob pattern
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
