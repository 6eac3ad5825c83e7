//! Console rendering of command reports

use std::fmt::Display;
use std::io::{self, Write};

use heymark_core::cache::CacheStatus;
use heymark_core::config::LinkConfig;
use heymark_core::constants::LATEST_VERSION_COMMAND;
use heymark_core::paths;
use heymark_core::status::StatusReport;
use heymark_core::sync::{CleanReport, SyncReport, ToolCleanup};
use heymark_core::tools::ToolRegistry;

pub fn link(out: &mut impl Write, config: &LinkConfig) -> io::Result<()> {
    writeln!(out, "[Link] Saved to {}", paths::config_relative())?;
    writeln!(out, "  repo: {}", config.repo_url)?;
    if !config.is_default_branch() {
        writeln!(out, "  branch: {}", config.branch)?;
    }
    if !config.folder.is_empty() {
        writeln!(out, "  folder: {}", config.folder)?;
    }
    Ok(())
}

pub fn sync(out: &mut impl Write, report: &SyncReport) -> io::Result<()> {
    writeln!(out, "[Sync]")?;
    source_lines(out, &report.config, &report.cache_status)?;
    writeln!(
        out,
        "  skills: {} ({})",
        report.skill_names.len(),
        report.skill_names.join(", ")
    )?;
    writeln!(out, "  from:   {}", report.skills_dir.display())?;
    writeln!(out)?;

    removed(out, &report.cleaned)?;

    for tool in &report.generated {
        writeln!(
            out,
            "  {:<16} -> {} ({} rules)",
            tool.name, tool.output_pattern, tool.count
        )?;
    }

    writeln!(out)?;
    writeln!(out, "[Done] {} tools synced.", report.generated.len())
}

pub fn clean(out: &mut impl Write, report: &CleanReport) -> io::Result<()> {
    removed(out, &report.cleaned)?;
    writeln!(out, "[Done] {} tools cleaned.", report.tools_cleaned())
}

pub fn status(out: &mut impl Write, report: &StatusReport) -> io::Result<()> {
    writeln!(out, "[Status]")?;
    writeln!(out, "  project: {}", report.root.display())?;
    writeln!(out, "  config:  {}", report.config_file)?;

    match &report.link {
        Some(link) => {
            writeln!(out, "  repo:    {}", link.config.repo_url)?;
            writeln!(out, "  branch:  {}", link.config.branch)?;
            writeln!(out, "  folder:  {}", link.config.folder_label())?;
            writeln!(out, "  cache:   {}", link.cache.label())?;
        }
        None => {
            writeln!(out, "  No repository is linked yet.")?;
            writeln!(out, "  Run: heymark link <repo-url>")?;
        }
    }

    writeln!(out, "  tools:   {}", report.tools.join(", "))
}

pub fn help(out: &mut impl Write, tools: &ToolRegistry) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "  heymark link <repo-url> [--branch|-b <name>] [--folder|-f <path>]")?;
    writeln!(out, "  heymark link --samples")?;
    writeln!(out, "  heymark sync .")?;
    writeln!(out, "  heymark sync <tool1> <tool2> ...")?;
    writeln!(out, "  heymark clean .")?;
    writeln!(out, "  heymark clean <tool1> <tool2> ...")?;
    writeln!(out, "  heymark status")?;
    writeln!(out)?;
    writeln!(out, "Supported tools:")?;
    for tool in tools.iter() {
        writeln!(out, "  {:<14} {}", tool.key(), tool.output_pattern())?;
    }
    writeln!(out)?;
    writeln!(out, "Update:  {}", LATEST_VERSION_COMMAND)
}

/// Summary line plus indented hints; write failures are ignored.
pub fn error(out: &mut impl Write, err: &impl Display, details: &[String]) {
    let _ = writeln!(out, "[Error] {:#}", err);
    for line in details {
        let _ = writeln!(out, "  {}", line);
    }
}

fn source_lines(out: &mut impl Write, config: &LinkConfig, cache: &CacheStatus) -> io::Result<()> {
    writeln!(out, "  repo:   {}", config.repo_url)?;
    if !config.folder.is_empty() {
        writeln!(out, "  folder: {}", config.folder)?;
    }
    if !config.is_default_branch() {
        writeln!(out, "  branch: {}", config.branch)?;
    }
    if cache.is_stale() {
        writeln!(out, "  cache:  stale (refresh failed, using previous copy)")?;
    }
    Ok(())
}

/// `[Clean]` block; printed only when something was removed
fn removed(out: &mut impl Write, cleaned: &[ToolCleanup]) -> io::Result<()> {
    let paths: Vec<&String> = cleaned.iter().flat_map(|c| &c.removed).collect();
    if paths.is_empty() {
        return Ok(());
    }

    writeln!(out, "[Clean]")?;
    for path in paths {
        writeln!(out, "  Removed: {}", path)?;
    }
    writeln!(out)
}
