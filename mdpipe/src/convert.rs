//! File conversion and the failure policy around it.
use std::{
  fs,
  io,
  panic::{self, AssertUnwindSafe},
  path::Path,
};

use log::{debug, error, info};
use mdpipe_core::Pipeline;

use crate::error::ConvertError;

/// Read `input`, convert it and write the HTML to `output`.
///
/// # Errors
///
/// Returns [`ConvertError::NotFound`] if `input` does not exist,
/// [`ConvertError::Io`] for any other read or write failure (including input
/// that is not valid UTF-8) and [`ConvertError::Unexpected`] if the pipeline
/// panicked.
pub fn convert_file(
  input: &Path,
  output: &Path,
  pipeline: &Pipeline,
) -> Result<(), ConvertError> {
  let markdown = read_markdown(input)?;
  debug!("Read {} bytes from {}", markdown.len(), input.display());

  let html = convert_with_recovery(pipeline, &markdown)?;

  fs::write(output, &html).map_err(|source| {
    ConvertError::Io {
      path: output.to_path_buf(),
      source,
    }
  })?;

  info!("Conversion successful. HTML file saved as {}", output.display());
  Ok(())
}

fn read_markdown(path: &Path) -> Result<String, ConvertError> {
  fs::read_to_string(path).map_err(|source| {
    if source.kind() == io::ErrorKind::NotFound {
      ConvertError::NotFound {
        path: path.to_path_buf(),
      }
    } else {
      ConvertError::Io {
        path: path.to_path_buf(),
        source,
      }
    }
  })
}

/// Run the pipeline, turning a panic into [`ConvertError::Unexpected`].
///
/// # Errors
///
/// Returns [`ConvertError::Unexpected`] carrying the panic message.
pub fn convert_with_recovery(
  pipeline: &Pipeline,
  markdown: &str,
) -> Result<String, ConvertError> {
  panic::catch_unwind(AssertUnwindSafe(|| pipeline.convert(markdown))).map_err(
    |panic_err| {
      let message = panic_err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| {
          panic_err.downcast_ref::<&str>().map(|s| (*s).to_owned())
        })
        .unwrap_or_else(|| {
          "unknown panic while running the pipeline".to_owned()
        });
      ConvertError::Unexpected(message)
    },
  )
}

/// Apply the failure policy to a conversion outcome.
///
/// Failures are always logged. With `strict` unset they are swallowed so the
/// process still exits successfully; with `strict` set they are returned.
///
/// # Errors
///
/// Returns the conversion error when `strict` is set.
pub fn finish(
  outcome: Result<(), ConvertError>,
  strict: bool,
) -> Result<(), ConvertError> {
  match outcome {
    Ok(()) => Ok(()),
    Err(e) => {
      error!("{e}");
      if strict { Err(e) } else { Ok(()) }
    },
  }
}
