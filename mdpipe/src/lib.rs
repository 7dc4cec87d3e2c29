//! Expose mdpipe's internal API for use in integration tests. The conversion
//! logic itself lives in `mdpipe-core`; this crate is the command-line shell
//! around it.
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
