//! Files command implementation.

use crate::cli::FilesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use coltype_engine::list_csv_files;

/// Execute the files command.
pub fn execute_files(args: FilesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let dir = args.dir.as_deref().unwrap_or(&config.data_dir);
    let files = list_csv_files(dir)?;
    println!("{}", formatter.format_files(&files)?);
    Ok(())
}
