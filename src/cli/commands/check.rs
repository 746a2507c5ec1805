//! Check Markdown files for unbalanced HTML tags

use std::path::Path;

use tagcheck::config::{Config, base_dir};
use tagcheck::core::services::Checker;
use tagcheck::discovery::{self, TargetKind};
use tagcheck::output::{FileReport, OutputMode, RunReport};

/// Check a target path and exit with status 1 if any file has defects
pub fn check(
    path: Option<&Path>,
    list_tags: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(config_path, &cwd)?;

    let target = match path {
        Some(path) => path.to_path_buf(),
        None => base_dir(config_path, &cwd).join(&config.check.default_target),
    };
    let options = config.check.discovery_options()?;
    let kind = discovery::classify(&target, &options)?;
    let files = match kind {
        TargetKind::File => vec![target.clone()],
        TargetKind::Directory => discovery::walk_directory(&target, &options)?,
    };
    log::debug!("checking {} file(s) under {}", files.len(), target.display());

    let checker = Checker::new(config.check.scanner());
    let shown = target.strip_prefix(&cwd).unwrap_or(&target);
    let mut report = RunReport::new(shown, kind == TargetKind::Directory);

    for file in &files {
        let text = discovery::read_markdown(file)?;
        let result = checker.check(&text);

        let display = file.strip_prefix(&cwd).unwrap_or(file).display().to_string();
        if let Some(line) = result.unterminated_fence {
            log::warn!("{display}: code fence opened on line {line} is never closed");
        }

        report.add(FileReport::from_result(display, result, list_tags), list_tags);
    }

    report.render(mode);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}

