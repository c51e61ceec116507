use anyhow::{Context, Result};
use clap::Parser;
use evvgas_core_rs::inputs::FieldRole;
use evvgas_core_rs::{
    get_cost_schema, render_text, Calculator, Field, ParameterFile, ReportOptions, Variant,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, FieldArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compute {
            variant,
            params,
            fields,
            annual,
            format,
        } => {
            let file = params
                .map(|path| {
                    ParameterFile::from_path(&path)
                        .with_context(|| format!("Failed to load parameters from {}", path.display()))
                })
                .transpose()?;
            let variant = variant
                .map(Variant::from)
                .or_else(|| file.as_ref().and_then(|f| f.variant))
                .unwrap_or_default();

            let output = handle_compute(variant, file.as_ref(), &fields, annual, format)?;
            print!("{output}");
        }
        Commands::Schema => println!("{}", get_cost_schema()),
        Commands::Fields { variant } => print!("{}", render_fields(variant.into())),
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for JSON output
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the session: variant defaults, then file values, then flags
fn handle_compute(
    variant: Variant,
    file: Option<&ParameterFile>,
    fields: &FieldArgs,
    annual: bool,
    format: OutputFormat,
) -> Result<String> {
    let mut calculator = Calculator::new(variant);
    if let Some(file) = file {
        file.apply_to(&mut calculator);
    }
    for (field, raw) in fields.edits() {
        calculator.set_field(field, raw);
    }
    debug!(variant = %calculator.variant(), "computing metrics");

    match format {
        OutputFormat::Text => Ok(render_text(
            &calculator.metrics(),
            ReportOptions {
                show_annual: annual,
            },
        )),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&calculator.snapshot())
                .context("Failed to serialize results")?;
            Ok(format!("{json}\n"))
        }
    }
}

fn render_fields(variant: Variant) -> String {
    let mut out = format!("Fields ({variant} defaults)\n");
    for field in Field::ALL {
        let default = field
            .default_value(variant)
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        let rule = match field.role() {
            FieldRole::Percentage => "clamp 0-100".to_string(),
            role => format!("invalid -> {}", role.fallback()),
        };
        let step = field
            .constraints()
            .step
            .map(|s| format!(" step {s}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "  --{:<22} {:<8} {:<34} default {:<7} {}{}\n",
            field.flag_name(),
            field.group().label(),
            field.label(),
            default,
            rule,
            step
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let file = ParameterFile::from_json_str(r#"{ "gasPrice": 4.0, "mpg": 20 }"#).unwrap();
        let fields = FieldArgs {
            mpg: Some("40".to_string()),
            ..Default::default()
        };
        let out = handle_compute(Variant::Simple, Some(&file), &fields, false, OutputFormat::Json)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["inputs"]["gasPrice"], 4.0);
        assert_eq!(json["inputs"]["mpg"], 40.0);
        assert_eq!(json["metrics"]["gasFuelCostPerMile"], 0.1);
    }

    #[test]
    fn test_render_fields_lists_everything() {
        let text = render_fields(Variant::Phev);
        for field in Field::ALL {
            assert!(text.contains(field.flag_name()), "{}", field.flag_name());
        }
        assert!(text.contains("clamp 0-100"));
    }

    #[test]
    fn test_render_fields_shows_groups() {
        let text = render_fields(Variant::Simple);
        let line = |flag: &str| {
            text.lines()
                .find(|l| l.trim_start().starts_with(&format!("--{flag} ")))
                .unwrap()
                .to_string()
        };
        assert!(line("miles-per-kwh").contains(" EV "));
        assert!(line("mpg").contains(" Gas Car "));
        assert!(line("annual-miles").contains(" Shared "));
    }
}
