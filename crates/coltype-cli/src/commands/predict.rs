//! Predict command implementation.

use crate::cli::PredictArgs;
use crate::error::Result;
use crate::output::Formatter;
use coltype_domain::ClassificationResult;
use coltype_engine::{Engine, Table};

/// Execute the predict command.
pub fn execute_predict(args: PredictArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let result = predict(&args, engine)?;
    println!("{}", formatter.format_prediction(&args.column, &result)?);
    Ok(())
}

/// Classify the requested column of the input file.
pub fn predict(args: &PredictArgs, engine: &Engine) -> Result<ClassificationResult> {
    let table = Table::from_path(&args.input)?;
    Ok(engine.classify_column(&table, &args.column)?)
}
