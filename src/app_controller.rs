/*!
 * Application controller for the command line tool.
 *
 * Resolves the effective encoding and output format, parses a single file or
 * every SRT file of a directory, and renders the result to a writer.
 */

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};

use crate::app_config::{Config, OutputFormat};
use crate::file_utils::{FileManager, FileType};
use crate::subtitle_processor::SubtitleCollection;

/// Per run overrides coming from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Encoding label, overrides the configured default
    pub encoding: Option<String>,
    /// Output format, overrides the configured one
    pub output_format: Option<OutputFormat>,
}

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files parsed successfully
    pub processed: usize,
    /// Files that failed to parse
    pub failed: usize,
    /// Total number of cues over all parsed files
    pub cues: usize,
}

/// Main application controller
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a single subtitle file
    pub fn process_file(&self, path: &Path, options: &RunOptions) -> Result<SubtitleCollection> {
        let encoding = options
            .encoding
            .as_deref()
            .unwrap_or(&self.config.default_encoding);

        let collection = match SubtitleCollection::load(path, encoding) {
            Ok(collection) => collection,
            Err(e) => {
                let e = anyhow::Error::new(e).context(format!("Failed to parse subtitle file {:?}", path));

                // only sniff the content once parsing has already failed
                return Err(match FileManager::detect_file_type(path) {
                    Ok(FileType::Unknown) => e.context(format!("{:?} doesn't look like a SubRip file", path)),
                    _ => e,
                });
            }
        };

        let overlaps = collection.overlap_count();
        if overlaps > 0 {
            warn!("Found {} overlapping subtitle cues in {:?}", overlaps, path);
        }

        Ok(collection)
    }

    /// Parse a file or every `.srt` file below a directory and render the
    /// result to `out`.
    ///
    /// Failing files of a directory are logged and counted, a failing
    /// single file is returned as an error.
    pub fn run<W: Write>(&self, input: &Path, options: &RunOptions, out: &mut W) -> Result<RunSummary> {
        let format = options.output_format.unwrap_or(self.config.output_format);

        if FileManager::file_exists(input) {
            let collection = self.process_file(input, options)?;
            let summary = RunSummary {
                processed: 1,
                failed: 0,
                cues: collection.len(),
            };

            out.write_all(Self::render_single(&collection, format)?.as_bytes())?;
            return Ok(summary);
        }

        if !FileManager::dir_exists(input) {
            return Err(anyhow!("Input path does not exist: {:?}", input));
        }

        let (collections, failed) = self.process_folder(input, options)?;
        let summary = RunSummary {
            processed: collections.len(),
            failed,
            cues: collections.iter().map(SubtitleCollection::len).sum(),
        };

        out.write_all(Self::render_many(&collections, format)?.as_bytes())?;
        info!(
            "Finished processing {} files ({} failed, {} cues)",
            summary.processed, summary.failed, summary.cues
        );

        Ok(summary)
    }

    fn process_folder(&self, dir: &Path, options: &RunOptions) -> Result<(Vec<SubtitleCollection>, usize)> {
        let files: Vec<PathBuf> = FileManager::find_files(dir, "srt")?;

        if files.is_empty() {
            warn!("No subtitle files found in directory: {:?}", dir);
        }

        let mut collections = Vec::with_capacity(files.len());
        let mut failed = 0;

        for path in files {
            info!("Processing subtitle: {:?}", path);

            match self.process_file(&path, options) {
                Ok(collection) => collections.push(collection),
                Err(e) => {
                    error!("Error processing file: {:#}", e);
                    failed += 1;
                }
            }
        }

        Ok((collections, failed))
    }

    fn render_single(collection: &SubtitleCollection, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Summary => Ok(Self::summary_of(collection)),
            OutputFormat::Srt => Ok(collection.to_srt_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(collection)? + "\n"),
        }
    }

    fn render_many(collections: &[SubtitleCollection], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Summary => Ok(collections.iter().map(Self::summary_of).collect()),
            OutputFormat::Srt => Ok(collections
                .iter()
                .map(SubtitleCollection::to_srt_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(collections)? + "\n"),
        }
    }

    fn summary_of(collection: &SubtitleCollection) -> String {
        format!(
            "{}Overlapping cues: {}\n",
            collection,
            collection.overlap_count()
        )
    }
}
