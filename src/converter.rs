use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::cue_document::CueDocument;
use crate::errors::ConversionResult;
use crate::file_utils::FileManager;
use crate::scaling::ScalingDescriptor;
use crate::sequencer::sequence_events;
use crate::writers::{write_content, OutputFormat};

// @module: Conversion entry points

/// Convert caption XML text into subtitle file text.
///
/// The whole output is built in memory; any error aborts with nothing produced.
pub fn convert(
    content: &str,
    format: OutputFormat,
    scaling: &ScalingDescriptor,
) -> ConversionResult<String> {
    scaling.validate()?;

    let document = CueDocument::parse(content)?;
    let events = sequence_events(&document.cues);

    debug!("Writing {} caption events as {}", events.len(), format);
    Ok(write_content(&events, &document.defaults, format, scaling))
}

/// Drives file to file conversion with the application configuration
pub struct Converter {
    // @field: App configuration
    config: Config,
}

impl Converter {
    // @method: Create a new converter with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the output path and format for an input file.
    ///
    /// Without an explicit output path the result is `<input>.srt`. An explicit
    /// path must end in a supported extension.
    pub fn resolve_output(
        input_file: &Path,
        output_file: Option<&Path>,
    ) -> ConversionResult<(PathBuf, OutputFormat)> {
        match output_file {
            Some(path) => {
                let format = OutputFormat::from_path(path)?;
                Ok((path.to_path_buf(), format))
            }
            None => Ok((FileManager::default_output_path(input_file), OutputFormat::Srt)),
        }
    }

    /// Convert one input file, returning the path written
    pub fn run(&self, input_file: &Path, output_file: Option<&Path>) -> Result<PathBuf> {
        let (output_path, format) = Self::resolve_output(input_file, output_file)?;

        let content = FileManager::read_to_string(input_file)?;
        let rendered = convert(&content, format, &self.config.scaling)
            .with_context(|| format!("Failed to convert {:?}", input_file))?;

        FileManager::write_to_file(&output_path, &rendered)?;
        info!("Success: {:?}", output_path);

        Ok(output_path)
    }
}
