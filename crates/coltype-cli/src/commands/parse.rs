//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::Formatter;
use coltype_engine::{Engine, ParsedTable, Selection, Table};

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let parsed = parse(&args, engine)?;
    println!("{}", formatter.format_parse_summary(&parsed, &args.output)?);
    Ok(())
}

/// Select and parse a column of the input, writing the result CSV.
pub fn parse(args: &ParseArgs, engine: &Engine) -> Result<ParsedTable> {
    let table = Table::from_path(&args.input)?;
    let selection = Selection {
        column: args.column.clone(),
        label: args.label.map(Into::into),
    };

    let parsed = engine.parse_table(&table, &selection)?;
    parsed.write_to_path(&args.output)?;
    Ok(parsed)
}
