//! Check profile stylesheets and color pairs from the command line.
//!
//! `style_check css` runs the same sanitizer the editor uses, so an operator
//! can see exactly what would survive a save. `style_check contrast` runs
//! the legibility check. Both speak JSON with `--json` for scripting.

use clap::{Args, Parser, Subcommand};
use profilecss::color::Rgb;
use profilecss::contrast::{has_good_contrast, suggest_text_color};
use profilecss::validate_and_sanitize;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
  name = "style_check",
  version,
  about = "Validate profile CSS and color contrast"
)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Sanitize a stylesheet and report what survives
  Css(CssArgs),
  /// Check a background/foreground color pair against WCAG AA
  Contrast(ContrastArgs),
}

#[derive(Args, Debug)]
struct CssArgs {
  /// Stylesheet file to check; reads stdin when omitted
  file: Option<String>,

  /// Emit machine-readable JSON instead of text
  #[arg(long)]
  json: bool,
}

#[derive(Args, Debug)]
struct ContrastArgs {
  /// Background color, e.g. '#1A2B3C'
  background: String,

  /// Foreground (text) color, e.g. '#FFFFFF'
  foreground: String,

  /// Foreground opacity in [0, 1]
  #[arg(long, default_value_t = 1.0)]
  opacity: f64,

  /// Emit machine-readable JSON instead of text
  #[arg(long)]
  json: bool,
}

fn main() -> ExitCode {
  env_logger::init();

  let cli = Cli::parse();
  match cli.command {
    Command::Css(args) => run_css(&args),
    Command::Contrast(args) => run_contrast(&args),
  }
}

fn run_css(args: &CssArgs) -> ExitCode {
  let raw = match read_input(args.file.as_deref()) {
    Ok(raw) => raw,
    Err(err) => {
      eprintln!("error: {}", err);
      return ExitCode::FAILURE;
    }
  };

  let outcome = validate_and_sanitize(&raw);

  if args.json {
    match serde_json::to_string_pretty(&outcome) {
      Ok(json) => println!("{}", json),
      Err(err) => {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
      }
    }
  } else if outcome.valid {
    if outcome.rules_removed(&raw) {
      eprintln!("note: some rules were removed for safety");
    }
    println!("{}", outcome.sanitized);
  } else if let Some(error) = &outcome.error {
    eprintln!("rejected: {}", error);
  }

  if outcome.valid {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

fn run_contrast(args: &ContrastArgs) -> ExitCode {
  let background: Rgb = match args.background.parse() {
    Ok(color) => color,
    Err(err) => {
      eprintln!("error: background: {}", err);
      return ExitCode::FAILURE;
    }
  };
  let foreground: Rgb = match args.foreground.parse() {
    Ok(color) => color,
    Err(err) => {
      eprintln!("error: foreground: {}", err);
      return ExitCode::FAILURE;
    }
  };

  let report = has_good_contrast(background, foreground, args.opacity);

  if args.json {
    match serde_json::to_string_pretty(&report) {
      Ok(json) => println!("{}", json),
      Err(err) => {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
      }
    }
  } else {
    println!(
      "ratio {:.2} (minimum {:.1}): {}",
      report.ratio,
      report.min_required,
      if report.is_good { "ok" } else { "too low" }
    );
    if !report.is_good {
      println!(
        "suggestion: use {} text on {}",
        suggest_text_color(background),
        background
      );
    }
  }

  if report.is_good {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

fn read_input(file: Option<&str>) -> std::io::Result<String> {
  match file {
    Some(path) => fs::read_to_string(path),
    None => {
      let mut buffer = String::new();
      std::io::stdin().read_to_string(&mut buffer)?;
      Ok(buffer)
    }
  }
}
