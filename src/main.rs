//! Churnlens: Churn Dataset Chart Projection CLI
//!
//! Loads a churn CSV dataset, runs the projector selected by the chart
//! configuration, and renders the result as a terminal table and/or a JSON
//! export.

use anyhow::Result;
use clap::Parser;
use console::style;

use churnlens::cli::Args;
use churnlens::pipeline::{
    get_column_names, load_dataset_with_progress, project, resolve_churn_key, ChartOutcome,
    CHURN_ALIASES,
};
use churnlens::report::{display_chart, export_chart_json};
use churnlens::utils::{
    print_banner, print_completion, print_config, print_info, print_saved, print_step_header,
    print_success, print_warning,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // Discovery mode: show what the dataset offers and exit
    if args.list_columns {
        return list_columns(&args);
    }

    print_banner(env!("CARGO_PKG_VERSION"));

    let spec = args.chart_spec();
    print_config(&args.input, &spec);

    // Step 1: Load dataset
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&args.input, args.infer_schema_length)?;

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    match resolve_churn_key(&df) {
        Some(key) => print_info(&format!("Churn column: {}", style(key).yellow())),
        None => print_info("No churn column found (churn charts will be unavailable)"),
    }

    // Step 2: Project the configured chart
    print_step_header(1, "Project Chart Data");

    match project(&df, &spec)? {
        ChartOutcome::NotApplicable(reason) => {
            print_warning(&format!("Chart not available: {}", reason));
        }
        ChartOutcome::Ready(data) => {
            print_success("Projection complete");
            display_chart(&spec, &data);

            if let Some(output) = &args.output {
                export_chart_json(output, &args.input, &spec, &data)?;
                print_saved(output);
            }

            print_completion();
        }
    }

    Ok(())
}

fn list_columns(args: &Args) -> Result<()> {
    let columns = get_column_names(&args.input)?;

    println!("{} columns in {}:", columns.len(), args.input.display());
    for column in &columns {
        println!("  {}", column);
    }

    let churn_key = columns.iter().find(|name| {
        let lower = name.to_lowercase();
        CHURN_ALIASES.iter().any(|alias| lower == *alias)
    });
    match churn_key {
        Some(key) => println!("Churn column: {}", key),
        None => println!("Churn column: none (no column named churn/exited/target)"),
    }

    Ok(())
}
