use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eframe::egui;

use cfa_guide::config::{SiteConfig, DEFAULT_BASE_PATH};
use cfa_guide::export::export_site;
use cfa_guide::geometry::diagram::DiagramLayout;
use cfa_guide::model::ModelVariant;
use cfa_guide::render::svg::render_diagram_svg;
use cfa_guide::{GuideError, Result};

mod app;
mod ui;

#[derive(Parser)]
#[command(name = "cfa-guide", version, about = "Visual guide to CFA best practices with ordinal data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the guide window (default)
    Run,
    /// Write the static site
    Export {
        #[arg(long, default_value = "site")]
        out: PathBuf,
        #[arg(long, default_value = DEFAULT_BASE_PATH)]
        base_path: String,
    },
    /// Print one model diagram as SVG
    Svg {
        #[arg(long, default_value = "correlated", value_parser = parse_variant)]
        variant: ModelVariant,
    },
}

fn parse_variant(raw: &str) -> std::result::Result<ModelVariant, String> {
    ModelVariant::from_slug(raw).ok_or_else(|| {
        let known: Vec<&str> = ModelVariant::ALL.iter().map(|v| v.slug()).collect();
        format!("unknown variant {raw:?} (expected one of: {})", known.join(", "))
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match dispatch(cli.command.unwrap_or(Command::Run)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run => run_window(SiteConfig::standard()?),
        Command::Export { out, base_path } => {
            let config = SiteConfig::standard()?.with_base_path(&base_path)?;
            let report = export_site(&out, &config)?;
            for f in &report.files {
                println!("{}", f.display());
            }
            Ok(())
        }
        Command::Svg { variant } => {
            print!("{}", render_diagram_svg(&DiagramLayout::standard(), variant));
            Ok(())
        }
    }
}

fn run_window(config: SiteConfig) -> Result<()> {
    log::info!("opening guide window ({}x{})", config.window_size[0], config.window_size[1]);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CFA Best Practices",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app::GuideApp::new(config)))
        }),
    )
    .map_err(|e| GuideError::Window(e.to_string()))
}
