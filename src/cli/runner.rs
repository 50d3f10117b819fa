use std::io::Write;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use nitfmeta::core::params::TransformerConfig;
use nitfmeta::io::writers::metadata::write_output;
use nitfmeta::types::OutputFormat;
use nitfmeta::{Metacard, NitfTransformer, process_directory_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Log filter used with `--log` when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "nitfmeta=debug";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn load_config(args: &CliArgs) -> Result<TransformerConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => TransformerConfig::load(path)?,
        None => TransformerConfig::default(),
    };
    if let Some(policy) = args.footprint_policy {
        config.footprint_policy = policy;
    }
    Ok(config)
}

fn print_output(metacard: &Metacard, format: OutputFormat) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Metacard => {
            let json = serde_json::to_string_pretty(metacard).map_err(nitfmeta::Error::from)?;
            writeln!(stdout, "{}", json)?;
        }
        OutputFormat::Xml => write!(stdout, "{}", metacard.metadata)?,
        OutputFormat::Wkt => {
            if let Some(location) = &metacard.location {
                writeln!(stdout, "{}", location)?;
            }
        }
    }
    Ok(())
}

fn process_single_file(
    transformer: &NitfTransformer,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    id: Option<&str>,
) -> Result<(), AppError> {
    let metacard = transformer.transform_path(input, id)?;
    match output {
        Some(path) => write_output(path, &metacard, format)?,
        None => print_output(&metacard, format)?,
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = load_config(&args)?;
    info!("Footprint policy: {}", config.footprint_policy);
    let transformer = NitfTransformer::new(config);

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(
            &transformer,
            &input_dir,
            &output_dir,
            args.format,
            !args.fail_fast,
        )?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;

        process_single_file(
            &transformer,
            &input,
            args.output.as_deref(),
            args.format,
            args.id.as_deref(),
        )?;
        info!("Successfully processed: {:?}", input);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
