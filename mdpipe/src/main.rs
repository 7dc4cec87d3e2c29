use std::io::Write;

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, debug};
use mdpipe::{cli::Cli, config::Config, convert};
use mdpipe_core::Pipeline;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // The log level comes from configuration, so it is resolved first
  let config = Config::load(&cli.config_files, &cli.config_overrides)
    .and_then(|config| config.merge_with_cli(&cli))
    .wrap_err("Failed to load configuration")?;

  env_logger::Builder::new()
    .filter_level(if config.is_verbose() {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .format(|buf, record| {
      writeln!(
        buf,
        "{} - {} - {}",
        buf.timestamp(),
        record.level(),
        record.args()
      )
    })
    .init();
  debug!("Configuration: {config:?}");

  let pipeline = Pipeline::with_options(config.pipeline_options());
  let outcome =
    convert::convert_file(&cli.input_file, &cli.output_file, &pipeline);

  convert::finish(outcome, config.is_strict()).wrap_err_with(|| {
    format!("Failed to convert {}", cli.input_file.display())
  })?;

  Ok(())
}
