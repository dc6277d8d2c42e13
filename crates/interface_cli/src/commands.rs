//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use domain_claims::{samples, ClaimIntake, DocumentSource, FileSystemSource, IntakeReport};

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Route every file in `paths` and render the reports.
pub fn execute_process(intake: &ClaimIntake, paths: &[PathBuf], formatter: &Formatter) -> Result<String> {
    let source = FileSystemSource::new();
    let reports = paths
        .iter()
        .map(|path| {
            let locator = path.to_string_lossy().into_owned();
            let report = run(intake, &source, &locator)?;
            Ok((locator, report))
        })
        .collect::<Result<Vec<_>>>()?;

    formatter.format_reports(&reports)
}

/// Write the bundled samples into `dir`, route them, and render the reports.
///
/// Text output ends with the JSON record of the first sample.
pub fn execute_demo(intake: &ClaimIntake, dir: &Path, formatter: &Formatter) -> Result<String> {
    fs::create_dir_all(dir)?;
    for sample in samples::ALL.iter() {
        fs::write(dir.join(sample.file_name), sample.text)?;
        debug!(file = sample.file_name, "wrote sample document");
    }
    info!(dir = %dir.display(), count = samples::ALL.len(), "sample documents written");

    let source = FileSystemSource::rooted(dir);
    let reports = samples::ALL
        .iter()
        .map(|sample| {
            let report = run(intake, &source, sample.file_name)?;
            Ok((format!("{} ({})", sample.title, sample.file_name), report))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = formatter.format_reports(&reports)?;
    if formatter.format() == OutputFormat::Text {
        if let Some((_, first)) = reports.first() {
            out.push_str(&format!(
                "\nJSON record for {}:\n{}\n",
                samples::ALL[0].file_name,
                formatter.format_json(first)?
            ));
        }
    }
    Ok(out)
}

fn run<S: DocumentSource>(intake: &ClaimIntake, source: &S, locator: &str) -> Result<IntakeReport> {
    intake.process(source, locator).map_err(|err| CliError::Document {
        locator: locator.to_string(),
        source: err,
    })
}
