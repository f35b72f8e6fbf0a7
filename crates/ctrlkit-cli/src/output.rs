//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use ctrlkit_filters::FilterSpec;
use ctrlkit_pid::{ControllerProfile, TapPoint};
use serde_json::json;

use crate::commands::Mode;
use crate::commands::simulate::SimulationRow;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": format!("{error:#}"),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the per-tick trace of a simulation
pub fn print_simulation(
    rows: &[SimulationRow],
    mode: Mode,
    final_output: f32,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let output = json!({
            "success": true,
            "mode": mode.as_str(),
            "final_output": final_output,
            "rows": rows
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:>6} {:>10} {:>12} {:>12} {:>12} {:>12}",
            "tick", "time", "setpoint", "feedback", "output", "error"
        )
        .bold()
    );
    for row in rows {
        println!(
            "{:>6} {:>10.3} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            row.tick, row.time, row.setpoint, row.feedback, row.output, row.error
        );
    }
    println!(
        "{} {} controller, plant output {:.4}",
        "Final:".bold(),
        mode.as_str(),
        final_output
    );
    Ok(())
}

/// Print input and filtered sample pairs
pub fn print_filter_output(
    spec: &FilterSpec,
    input: &[f32],
    filtered: &[f32],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let output = json!({
            "success": true,
            "spec": spec,
            "input": input,
            "output": filtered
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Filter:".bold(), spec.kind());
    for (x, y) in input.iter().zip(filtered) {
        println!("  {x:>12.4} -> {y:>12.4}");
    }
    Ok(())
}

/// Print a validated profile summary
pub fn print_validation(path: &str, profile: &ControllerProfile, json: bool) -> anyhow::Result<()> {
    if json {
        let output = json!({
            "success": true,
            "valid": true,
            "path": path,
            "profile": profile
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let pid = &profile.pid;
    println!("{} Profile is valid: {}", "✓".green(), path);
    println!("  Gains: kp={} ki={} kd={} dt={}", pid.kp, pid.ki, pid.kd, pid.dt);
    println!("  Output: [{}, {}]", pid.output_min, pid.output_max);
    if let Some(delta_limit) = profile.delta_limit {
        println!("  Delta limit: {delta_limit}");
    }
    for point in TapPoint::ALL {
        if let Some(spec) = profile.filter(point) {
            println!("  {} filter: {}", point, spec.kind());
        }
    }
    Ok(())
}

fn error_type_name(error: &Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map_or("Error", CliError::kind)
}
