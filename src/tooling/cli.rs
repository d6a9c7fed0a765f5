//! CLI Tooling
//!
//! Finds source maps in generated files (or whole directories), renders each
//! one to a standalone sunburst HTML page, and reports a summary table.

use crate::error::{CliError, ExtractError};
use crate::extract::extract_sourcemap;
use crate::html::{build_html, HtmlOptions};
use crate::sourcemap::SourceMap;
use crate::tree::builder::friendly_bytes;
use clap::Parser;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Sunmap CLI - source map sunburst visualiser
#[derive(Parser)]
#[command(name = "sunmap")]
#[command(about = "Render source maps as interactive sunburst HTML pages")]
pub struct Cli {
    /// Generated JS/CSS files, or directories to scan for them
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: next to each input file)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Page title (default: the sourcemap `file` field)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

/// Outcome of one rendered input file.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of original sources in the map.
    pub sources: usize,
    /// Total bytes of original contents.
    pub total_size: u64,
}

/// CLI context holding the resolved output settings.
pub struct CliContext {
    directory: Option<PathBuf>,
    title: Option<String>,
}

impl CliContext {
    /// Create a new CLI context, creating the output directory when given.
    pub fn new(directory: Option<PathBuf>, title: Option<String>) -> Result<Self, CliError> {
        if let Some(dir) = &directory {
            std::fs::create_dir_all(dir).map_err(|source| CliError::Write {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(Self { directory, title })
    }

    /// Render every input and return the human-readable summary.
    pub fn execute(&self, files: &[PathBuf]) -> Result<String, CliError> {
        let started = Instant::now();
        let inputs = collect_inputs(files)?;
        if inputs.is_empty() {
            return Err(CliError::Config(
                "no input files with source maps found".to_string(),
            ));
        }
        let mut rendered = Vec::with_capacity(inputs.len());
        for input in &inputs {
            rendered.push(self.render_file(input)?);
        }
        Ok(format_summary(&rendered, started.elapsed().as_millis()))
    }

    fn render_file(&self, input: &Path) -> Result<RenderedFile, CliError> {
        debug!(input = %input.display(), "reading generated file");
        let contents = std::fs::read_to_string(input).map_err(|source| CliError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let map = match extract_sourcemap(&contents) {
            Ok(map) => map,
            Err(ExtractError::ExternalFile { reference }) => {
                let map_path = input
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(&reference);
                info!(map = %map_path.display(), "following external map reference");
                let bytes = std::fs::read(&map_path).map_err(|source| CliError::Read {
                    path: map_path.clone(),
                    source,
                })?;
                SourceMap::from_slice(&bytes)?
            }
            Err(err) => return Err(err.into()),
        };

        let html = build_html(
            &map,
            &HtmlOptions {
                title: self.title.as_deref(),
                ..HtmlOptions::default()
            },
        )?;

        let output = self.output_path(input);
        std::fs::write(&output, html).map_err(|source| CliError::Write {
            path: output.clone(),
            source,
        })?;
        info!(output = %output.display(), "wrote visualization");

        let total_size = map
            .sources_content
            .iter()
            .flatten()
            .map(|c| c.len() as u64)
            .sum();
        Ok(RenderedFile {
            input: input.to_path_buf(),
            output,
            sources: map.sources.as_ref().map(Vec::len).unwrap_or(0),
            total_size,
        })
    }

    /// `<dir or input parent>/<input basename>.html`
    fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .unwrap_or(input.as_os_str())
            .to_string_lossy();
        let parent = match &self.directory {
            Some(dir) => dir.clone(),
            None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
        };
        parent.join(format!("{stem}.html"))
    }
}

/// Expand directory arguments into the JS/CSS files beneath them; plain file
/// arguments pass through untouched.
fn collect_inputs(files: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut inputs = Vec::new();
    for file in files {
        if file.is_dir() {
            for entry in WalkDir::new(file).sort_by_file_name() {
                let entry = entry.map_err(|err| CliError::Config(err.to_string()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                match path.extension().and_then(|e| e.to_str()) {
                    Some("js") | Some("css") => inputs.push(path),
                    _ => {}
                }
            }
        } else {
            inputs.push(file.clone());
        }
    }
    Ok(inputs)
}

fn format_summary(rendered: &[RenderedFile], elapsed_ms: u128) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", "Rendered visualizations".bold()));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Input", "Output", "Sources", "Size"]);
    for row in rendered {
        table.add_row(vec![
            row.input.display().to_string(),
            row.output.display().to_string(),
            row.sources.to_string(),
            friendly_bytes(row.total_size),
        ]);
    }
    out.push_str(&format!("{table}\n\n"));
    out.push_str(&format!("Finished in {elapsed_ms}ms\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_lands_next_to_the_input_by_default() {
        let context = CliContext {
            directory: None,
            title: None,
        };
        assert_eq!(
            context.output_path(Path::new("/build/bundle.min.js")),
            PathBuf::from("/build/bundle.min.html")
        );
    }

    #[test]
    fn output_path_honors_the_output_directory() {
        let context = CliContext {
            directory: Some(PathBuf::from("/viz")),
            title: None,
        };
        assert_eq!(
            context.output_path(Path::new("/build/bundle.js")),
            PathBuf::from("/viz/bundle.html")
        );
    }

    #[test]
    fn summary_lists_every_rendered_file() {
        let summary = format_summary(
            &[RenderedFile {
                input: PathBuf::from("a.js"),
                output: PathBuf::from("a.html"),
                sources: 3,
                total_size: 2048,
            }],
            12,
        );
        assert!(summary.contains("a.html"));
        assert!(summary.contains("Finished in 12ms"));
    }
}
