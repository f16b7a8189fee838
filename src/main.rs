//! CorgiArt - block-letter art for your terminal and beyond
//!
//! ```text
//!    ∩＿∩
//!   (・ω・)  Welcome to CorgiArt!
//!   /　 つ   Big letters, every color.
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use corgiart_config::{Config, ConfigManager};
use corgiart_core::studio::RENDER_FAILED;
use corgiart_core::{
    fetch_or_empty, hue_rgb, ArtError, ArtForm, ArtStudio, BuiltinCatalog, BuiltinGlyphSource,
    DirectoryDownloads, Grid, Notifier, Osc52Clipboard, RemoteCatalog, StyleMode, SvgExporter,
    SvgOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CorgiArt - Text to ASCII Art
#[derive(Parser, Debug)]
#[command(name = "corgiart")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render text as ASCII art
    Render {
        /// Text to render (2-40 characters)
        text: String,

        /// Font name
        #[arg(short = 'f', long)]
        font: Option<String>,

        /// Speech bubble instead of block letters
        #[arg(short = 'b', long)]
        bubble: bool,

        /// Rainbow colors
        #[arg(short = 'r', long)]
        rainbow: bool,

        /// Print the HTML fragment instead of text
        #[arg(long)]
        html: bool,

        /// Save the art as SVG
        #[arg(long)]
        svg: bool,

        /// Directory for SVG files
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// Copy the art to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
    /// List available fonts
    Fonts {
        /// Include the remote figlet catalog
        #[arg(long)]
        remote: bool,
    },
}

/// Prints notifications to stderr
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("🐕 {message}");
    }
}

/// Grid as text with 24-bit ANSI colors for colored cells
fn ansi_text(grid: &Grid) -> String {
    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for cell in row {
            match cell.hue.map(hue_rgb) {
                Some((r, g, b)) => out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", cell.ch)),
                None => out.push(cell.ch),
            }
        }
    }
    out
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    Ok(manager.config())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("corgiart={}", log_level)),
        ))
        .init();

    tracing::debug!("Starting CorgiArt v{}", env!("CARGO_PKG_VERSION"));
    corgiart_core::init()?;

    let config = load_config(args.config.as_ref())?;

    match args.command {
        Command::Fonts { remote } => {
            let mut fonts = fetch_or_empty(&BuiltinCatalog).await;
            if remote || config.catalog.remote {
                let catalog = RemoteCatalog::new(config.catalog.url.clone());
                fonts.extend(fetch_or_empty(&catalog).await);
            }
            for font in fonts {
                println!("{font}");
            }
        }
        Command::Render {
            text,
            font,
            bubble,
            rainbow,
            html,
            svg,
            out,
            copy,
        } => {
            let exporter = SvgExporter::new(SvgOptions {
                font_size: config.render.font_size,
                font_family: config.render.font_family.clone(),
                foreground: config.render.foreground.clone(),
                background: config.render.background.clone(),
            });
            let studio = ArtStudio::new(Arc::new(BuiltinGlyphSource), Arc::new(TerminalNotifier))
                .with_exporter(exporter)
                .with_file_prefix(config.export.file_prefix.clone());

            let form = ArtForm {
                text,
                style: if bubble {
                    StyleMode::SpeechBubble
                } else {
                    StyleMode::GlyphFont
                },
                font: font.unwrap_or_else(|| config.render.font.clone()),
                rainbow: rainbow || config.render.rainbow,
            };

            let rendering = match studio.submit(&form).await {
                Ok(rendering) => rendering,
                Err(ArtError::Validation(_)) => std::process::exit(2),
                Err(e) => {
                    tracing::debug!("Render failed: {}", e);
                    println!("{RENDER_FAILED}");
                    std::process::exit(1);
                }
            };

            if html {
                println!("{}", rendering.screen().markup());
            } else if std::io::stdout().is_terminal() {
                println!("{}", ansi_text(rendering.grid()));
            } else {
                println!("{}", rendering.plain_text());
            }

            if svg {
                let dir = out.unwrap_or_else(|| config.export.output_dir.clone());
                let sink = DirectoryDownloads::new(dir);
                if let Ok(file_name) = studio.export_svg(&sink) {
                    eprintln!("{}", sink.path_for(&file_name).display());
                }
            }

            if copy {
                // Failure is already reported
                let _ = studio.copy(&Osc52Clipboard::stdout()).await;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corgiart_core::colorize;

    #[test]
    fn test_arg_parsing() {
        let args = Args::try_parse_from(["corgiart", "render", "hello"]).unwrap();
        match args.command {
            Command::Render {
                text,
                bubble,
                rainbow,
                ..
            } => {
                assert_eq!(text, "hello");
                assert!(!bubble);
                assert!(!rainbow);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_arg_parsing_with_options() {
        let args = Args::try_parse_from([
            "corgiart", "--debug", "render", "moo", "--bubble", "-r", "--svg", "-o", "/tmp",
        ])
        .unwrap();
        assert!(args.debug);
        match args.command {
            Command::Render {
                bubble, rainbow, svg, out, ..
            } => {
                assert!(bubble && rainbow && svg);
                assert_eq!(out, Some(PathBuf::from("/tmp")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fonts_command() {
        let args = Args::try_parse_from(["corgiart", "fonts", "--remote"]).unwrap();
        assert!(matches!(args.command, Command::Fonts { remote: true }));
    }

    #[test]
    fn test_ansi_text_colors_non_spaces() {
        let text = ansi_text(&colorize("a b"));
        assert_eq!(
            text,
            "\x1b[38;2;255;51;51ma\x1b[0m \x1b[38;2;255;71;51mb\x1b[0m"
        );
    }

    #[test]
    fn test_ansi_text_plain_grid() {
        assert_eq!(ansi_text(&Grid::plain("| |\n|_|")), "| |\n|_|");
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\nfile_prefix = \"corgi\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.export.file_prefix, "corgi");
    }
}
