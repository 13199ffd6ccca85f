//! CLI entry point for styleboard.

use std::io::{Write, stdout};

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};
use serde::Serialize;

use styleboard::cli::{Cli, OutputFormat, PrintTarget};
use styleboard::clipboard::Clipboard;
use styleboard::config::{Selection, StyleboardConfig};
use styleboard::generate::{ColorPalette, generate_palette};
use styleboard::logging::init_logging;
use styleboard::style::{ResolvedRule, StyleId, resolved_rules, table};
use styleboard::validation::validate_with_warnings;
use styleboard::{summary, tui};

/// `--print rules` document.
#[derive(Serialize)]
struct RuleListing {
    style: StyleId,
    rules: Vec<ResolvedRule>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "styleboard", &mut stdout());
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    table().validate().wrap_err("Built-in style table is incomplete")?;

    let config = StyleboardConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;
    let selection = config.selection();

    if let Some(ref path) = cli.save_config {
        StyleboardConfig::from_selection(&selection)
            .save(path)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    if cli.is_interactive() {
        return tui::run(selection);
    }

    let palette = generate_palette(selection.seed);
    for warning in validate_with_warnings(&palette) {
        eprintln!("Warning: {warning}");
    }

    if let Some(target) = cli.print {
        let output = render(target, cli.format, &palette, &selection)?;
        print!("{output}");
    }

    if cli.copy {
        let text = summary::render(&palette, selection.style, selection.view);
        let clipboard = Clipboard::detect();
        let mut out = stdout();
        if let Err(e) = clipboard.set(&text, &mut out) {
            bail!("Failed to copy summary: {e}");
        }
        out.flush()?;
        eprintln!("Copied summary to clipboard");
    }

    Ok(())
}

fn render(
    target: PrintTarget,
    format: OutputFormat,
    palette: &ColorPalette,
    selection: &Selection,
) -> Result<String> {
    match target {
        PrintTarget::Palette => serialize(palette, format),
        PrintTarget::Rules => serialize(
            &RuleListing {
                style: selection.style,
                rules: resolved_rules(selection.style),
            },
            format,
        ),
        PrintTarget::Summary => Ok(summary::render(palette, selection.style, selection.view)),
    }
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).wrap_err("Failed to serialize to YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .wrap_err("Failed to serialize to JSON"),
    }
}
