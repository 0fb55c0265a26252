//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Config error - alias file or `--alias` value could not be used
pub const CONFIG_ERROR: i32 = 2;

/// Chart error - Chart.yaml rejected in strict mode
pub const CHART_ERROR: i32 = 4;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: i32 = 5;
