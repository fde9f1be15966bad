//! Check command implementation
//!
//! Reports the effective CLI configuration and engine version.

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(settings: &CliConfig) -> Result<()> {
    println!("phoenix {}", env!("CARGO_PKG_VERSION"));
    println!("  output format: {}", settings.output_format);
    println!("  log level:     {}", settings.log_level);
    println!("  calendars:     US, EU, GB (2023-2027 holiday tables)");
    Ok(())
}
