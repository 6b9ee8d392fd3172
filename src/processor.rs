//! Core task orchestration for Templatizer.
//! Turns configured file groups into bundled module files: expand the
//! sources, compile each surviving template, join the entries with their
//! positional affixes, and write the destination.

use crate::compiler::TemplateCompiler;
use crate::config::{Config, FileGroup, FormatOptions, Target};
use crate::error::{Error, Result};
use crate::formats::{resolve_format, ResolvedFormat};
use crate::sources::expand_sources;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Separator placed between rendered entries.
#[cfg(windows)]
pub const LINEFEED: &str = "\r\n";
/// Separator placed between rendered entries.
#[cfg(not(windows))]
pub const LINEFEED: &str = "\n";

/// A single compiled template: the name derived from its file name and the
/// function source produced by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub body: String,
}

/// Derives the template name from a source path: base name minus the final
/// extension. Duplicate names across a group are allowed and end up as
/// duplicate keys in the output.
pub fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Renders one entry with its positional affixes applied: the first entry
/// takes `first_prefix` instead of `each_prefix`, the last takes
/// `last_suffix` instead of `each_suffix`.
pub fn render_entry(
    entry: &TemplateEntry,
    index: usize,
    count: usize,
    format: &ResolvedFormat,
) -> String {
    let prefix = if index == 0 {
        &format.first_prefix
    } else {
        &format.each_prefix
    };
    let suffix = if index + 1 == count {
        &format.last_suffix
    } else {
        &format.each_suffix
    };
    format!(
        "{}{}{}{}{}",
        prefix, entry.name, format.each_middle, entry.body, suffix
    )
}

/// Joins the rendered entries and wraps them with the format's outer
/// affixes. An empty entry list produces exactly `prefix + suffix`.
pub fn assemble_module(entries: &[TemplateEntry], format: &ResolvedFormat) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_entry(entry, index, entries.len(), format))
        .collect();
    format!("{}{}{}", format.prefix, rendered.join(LINEFEED), format.suffix)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Reads and compiles the surviving source files of one group, in order.
fn collect_entries(
    sources: &[PathBuf],
    compiler: &dyn TemplateCompiler,
) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::new();
    for path in sources {
        let raw = fs::read_to_string(path).map_err(|e| Error::ProcessError {
            source_file: path.display().to_string(),
            e: e.to_string(),
        })?;
        let body = compiler.compile(&raw).map_err(|e| Error::ProcessError {
            source_file: path.display().to_string(),
            e: e.to_string(),
        })?;
        entries.push(TemplateEntry {
            name: template_name(path),
            body,
        });
    }
    Ok(entries)
}

/// Processes a single src→dest file group end to end and returns the
/// written destination path.
///
/// Missing sources are skipped with a warning and positions recompute over
/// the remaining sequence. The assembled output overwrites the destination
/// in full, creating parent directories as needed.
pub fn process_file_group(
    base: &Path,
    group: &FileGroup,
    format: &ResolvedFormat,
    compiler: &dyn TemplateCompiler,
) -> Result<PathBuf> {
    let sources = expand_sources(base, group.src.patterns())?;
    let existing: Vec<PathBuf> = sources
        .into_iter()
        .filter(|path| {
            if path.exists() {
                true
            } else {
                warn!("Source file \"{}\" not found.", path.display());
                false
            }
        })
        .collect();

    let entries = collect_entries(&existing, compiler)?;
    let output = assemble_module(&entries, format);

    let dest = base.join(&group.dest);
    write_file(&dest, &output)?;
    info!("File \"{}\" created.", dest.display());
    Ok(dest)
}

/// Runs one named target: resolves its format options against the
/// task-level ones and processes each of its file groups in order.
///
/// # Returns
/// * `Result<usize>` - Number of destination files written
pub fn process_target(
    base: &Path,
    name: &str,
    target: &Target,
    task_options: &FormatOptions,
    compiler: &dyn TemplateCompiler,
) -> Result<usize> {
    debug!("Running target '{}'.", name);
    let format = resolve_format(task_options, &target.options);

    let groups = target.files.groups();
    for group in &groups {
        process_file_group(base, group, &format, compiler)?;
    }
    Ok(groups.len())
}

/// Task entry point: runs the requested targets, or every configured target
/// when `targets` is empty. Returns the number of destination files
/// written.
///
/// # Errors
/// * `Error::UnknownTargetError` if a requested target is not configured;
///   the error is raised before any group is processed
pub fn run_task(
    base: &Path,
    config: &Config,
    targets: &[String],
    compiler: &dyn TemplateCompiler,
) -> Result<usize> {
    let selection: Vec<(&str, &Target)> = if targets.is_empty() {
        config
            .targets
            .iter()
            .map(|(name, target)| (name.as_str(), target))
            .collect()
    } else {
        targets
            .iter()
            .map(|name| {
                config
                    .targets
                    .get(name)
                    .map(|target| (name.as_str(), target))
                    .ok_or_else(|| Error::UnknownTargetError {
                        target: name.clone(),
                    })
            })
            .collect::<Result<_>>()?
    };

    let mut written = 0;
    for (name, target) in selection {
        written += process_target(base, name, target, &config.options, compiler)?;
    }
    Ok(written)
}
