use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use pitwall_analysis::AnalysisConfig;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// The filter comes from `RUST_LOG`; without it, `verbose` selects `debug`
/// over the default `warn`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Serialization format of a table written to an [`Output`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Destination of a result table: a file, or stdout when no path is given.
pub struct Output {
    writer: Box<dyn Write>,
    target: String,
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                target: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            target: path.display().to_string(),
        })
    }

    /// Writes `rows` to `path` (stdout when `None`) in `format`.
    pub fn save_rows<T>(
        rows: &[T],
        format: OutputFormat,
        path: Option<&Path>,
    ) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Self::create(path)?;
        match format {
            OutputFormat::Csv => output.write_csv(rows)?,
            OutputFormat::Json => output.write_json(rows)?,
        }
        output
            .writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", output.target))
    }

    fn write_json<T>(&mut self, rows: &[T]) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, rows)
            .and_then(|()| writeln!(self.writer).map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON to {}", self.target))
    }

    fn write_csv<T>(&mut self, rows: &[T]) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut writer = csv::Writer::from_writer(&mut self.writer);
        for row in rows {
            writer
                .serialize(row)
                .with_context(|| format!("Failed to write CSV row to {}", self.target))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write CSV to {}", self.target))
    }
}

/// Reads an [`AnalysisConfig`] from a JSON file; missing fields keep their defaults.
pub fn read_config(path: &Path) -> anyhow::Result<AnalysisConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
