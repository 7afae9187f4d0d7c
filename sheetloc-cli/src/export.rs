use std::env;
use std::path::Path;

use anyhow::Context;
use sheetloc::{Config, ParseIssue, Translator};

pub fn run(
    config_path: &Path,
    book: &str,
    sheet: Option<&str>,
    project_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = Config::from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let project_dir = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("failed to determine the current directory")?,
    };
    tracing::debug!(project_dir = %project_dir.display(), "substituting destination placeholders");
    config.substitute_project_dir(&project_dir);

    let translator = Translator::new(config.books);
    match sheet {
        Some(sheet) => {
            let outcome = translator
                .process_sheet(sheet, book)
                .with_context(|| format!("failed to process sheet `{sheet}`"))?;
            report(&outcome.artifacts, &outcome.issues);
        }
        None => {
            let outcome = translator
                .process_book(book)
                .context("failed to process book")?;
            report(&outcome.artifacts, &outcome.issues);
            if !outcome.failures.is_empty() {
                for (sheet, error) in &outcome.failures {
                    eprintln!("sheet `{sheet}` failed: {error}");
                }
                anyhow::bail!("{} sheet(s) failed", outcome.failures.len());
            }
        }
    }
    Ok(())
}

fn report(artifacts: &[sheetloc::ExportArtifact], issues: &[ParseIssue]) {
    for artifact in artifacts {
        println!(
            "wrote {} ({} bytes, {})",
            artifact.path.display(),
            artifact.bytes.len(),
            artifact.locale
        );
    }
    if !issues.is_empty() {
        eprintln!("skipped {} malformed row(s):", issues.len());
        for issue in issues {
            eprintln!("  {issue}");
        }
    }
}
