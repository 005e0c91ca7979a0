//! # Materials Estimator CLI
//!
//! Terminal front end for the estimation engine. Collects the project type and
//! dimensions (from flags, or interactively when a flag is missing), validates
//! them, and prints the ordered material list.

mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use estimator_core::{estimate, Dimensions, EstimateError, EstimatorSettings, Language, NumberStyle, ProjectType};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "estimator_cli")]
#[command(about = "Estimate construction materials for a slab, wall, floor or column")]
struct Args {
    /// Project type: slab, wall, floor, column (or losa, muro, firme, columna)
    #[arg(short = 't', long = "type")]
    project_type: Option<String>,

    /// Length in meters
    #[arg(short, long)]
    length: Option<String>,

    /// Width in meters (ignored for walls)
    #[arg(short, long)]
    width: Option<String>,

    /// Height or thickness in meters
    #[arg(long)]
    height: Option<String>,

    /// Label language: es or en
    #[arg(long)]
    lang: Option<String>,

    /// Group thousands in numbers (12,345.60)
    #[arg(long)]
    grouped: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Width filled in for walls when none is given; walls are priced by L × H.
const WALL_BLOCK_WIDTH_M: &str = "0.15";

/// Whether the width should be asked for. Unknown selectors still prompt so
/// the error is about the selector, not a missing width.
fn needs_width(project_type: &str) -> bool {
    ProjectType::from_str_flexible(project_type)
        .map(|pt| pt.uses_width())
        .unwrap_or(true)
}

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn resolve_settings(args: &Args) -> Result<EstimatorSettings, Box<dyn std::error::Error>> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings(path)?,
        None => EstimatorSettings::default(),
    };
    if let Some(lang) = &args.lang {
        settings.language = Language::from_str_flexible(lang)
            .ok_or_else(|| format!("unsupported language '{lang}' (use es or en)"))?;
    }
    if args.grouped {
        settings.number_style = NumberStyle::Grouped;
    }
    Ok(settings)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!(?settings, "resolved settings");

    let project_type = args
        .project_type
        .clone()
        .unwrap_or_else(|| prompt_line("Tipo de proyecto (losa/muro/firme/columna) [losa]: ", "losa"));
    let length = args.length.clone().unwrap_or_else(|| prompt_line("Largo (m): ", ""));
    let width = args.width.clone().unwrap_or_else(|| {
        if needs_width(&project_type) {
            prompt_line("Ancho (m): ", "")
        } else {
            WALL_BLOCK_WIDTH_M.to_string()
        }
    });
    let height = args.height.clone().unwrap_or_else(|| prompt_line("Alto / espesor (m): ", ""));

    let outcome = Dimensions::parse(&length, &width, &height)
        .and_then(|dims| estimate(&project_type, dims.length_m, dims.width_m, dims.height_m));

    match outcome {
        Ok(result) => {
            info!(project_type = %result.project_type, lines = result.len(), "estimate complete");

            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
                return ExitCode::SUCCESS;
            }

            println!();
            println!("═══════════════════════════════════════");
            println!("  {}", result.project_type.display_name(settings.language).to_uppercase());
            println!("═══════════════════════════════════════");
            for (label, quantity) in result.entries_with(&settings) {
                println!("  {:<22} {}", format!("{}:", label), quantity);
            }
            println!("═══════════════════════════════════════");
            println!("[OK] {}", success_message(settings.language));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", error_message(&e, settings.language));
            eprintln!("  {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn success_message(language: Language) -> &'static str {
    match language {
        Language::Spanish => "Cálculo completado exitosamente.",
        Language::English => "Estimate completed successfully.",
    }
}

fn error_message(error: &EstimateError, language: Language) -> &'static str {
    match (error, language) {
        (EstimateError::InvalidInput { .. }, Language::Spanish) => {
            "Por favor, completa todos los campos correctamente."
        }
        (EstimateError::InvalidInput { .. }, Language::English) => "Please fill in every field correctly.",
        (EstimateError::UnknownProjectType { .. }, Language::Spanish) => "Tipo de proyecto no válido.",
        (EstimateError::UnknownProjectType { .. }, Language::English) => "Invalid project type.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "estimator_cli", "--type", "muro", "-l", "5", "-w", "0.15", "--height", "2.5", "--lang", "en",
        ])
        .unwrap();
        assert_eq!(args.project_type.as_deref(), Some("muro"));
        let settings = resolve_settings(&args).unwrap();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.number_style, NumberStyle::Plain);
    }

    #[test]
    fn test_bad_language_flag() {
        let args = Args::try_parse_from(["estimator_cli", "--lang", "fr"]).unwrap();
        assert!(resolve_settings(&args).is_err());
    }

    #[test]
    fn test_width_prompt_skipped_for_walls() {
        assert!(!needs_width("muro"));
        assert!(!needs_width("wall"));
        assert!(needs_width("losa"));
        assert!(needs_width("techo"));
        assert!(Dimensions::parse("5", WALL_BLOCK_WIDTH_M, "2.5").is_ok());
    }

    #[test]
    fn test_banners() {
        let invalid = EstimateError::invalid_input("length", "", "Value is required");
        assert_eq!(
            error_message(&invalid, Language::Spanish),
            "Por favor, completa todos los campos correctamente."
        );
        let unknown = EstimateError::unknown_project_type("techo");
        assert_eq!(error_message(&unknown, Language::Spanish), "Tipo de proyecto no válido.");
        assert_eq!(success_message(Language::Spanish), "Cálculo completado exitosamente.");
    }
}
