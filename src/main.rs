//! Hockey rink printer (default binary).
//!
//! Draws one rink per requested size to stdout. Logging goes to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use hockey_rink::core::{create, RinkLayout};
use hockey_rink::logger;
use hockey_rink::term::{RenderOptions, TerminalRenderer};
use hockey_rink::types::RinkColor;

/// Default size when none is given: a 101x25 rink.
const DEFAULT_SIZE: &str = "101x25";

#[derive(Parser, Debug)]
#[command(name = "hockey-rink", version, about = "Draw an ASCII hockey rink")]
struct Cli {
    /// Rink size as WIDTHxHEIGHT. Repeat to draw several rinks in order.
    #[arg(
        short,
        long = "size",
        value_name = "WxH",
        value_parser = parse_size,
        default_value = DEFAULT_SIZE
    )]
    sizes: Vec<(u16, u16)>,

    /// Size the rink to the current terminal.
    #[arg(long, conflicts_with = "sizes")]
    fit: bool,

    /// Foreground color (black, red, green, yellow, blue, purple, cyan, white).
    #[arg(short, long, value_parser = parse_color)]
    color: Option<RinkColor>,

    /// Bright (bold) colors.
    #[arg(short = 'i', long)]
    bright: bool,

    /// Black background.
    #[arg(short = 'k', long)]
    black_background: bool,

    /// Draw with the top-left corner at terminal position ROW,COL (0-based).
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    at: Option<(u16, u16)>,

    /// Print the derived marking coordinates as JSON instead of drawing.
    #[arg(long)]
    layout: bool,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            bright: self.bright,
            black_background: self.black_background,
            origin: self.at.map(|(row, col)| (col, row)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    let sizes = if cli.fit {
        let (w, h) = crossterm::terminal::size().context("reading terminal size")?;
        // Leave the last line for the shell prompt.
        vec![(w, h.saturating_sub(1))]
    } else {
        cli.sizes.clone()
    };

    if cli.layout {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for &(w, h) in &sizes {
            let layout = RinkLayout::compute(w, h);
            serde_json::to_writer_pretty(&mut out, &layout)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let mut term = TerminalRenderer::new(cli.render_options());
    for &(w, h) in &sizes {
        tracing::debug!(width = w, height = h, "drawing rink");
        let rink = create(w, h);
        term.draw(&rink)?;
    }
    Ok(())
}

fn parse_size(s: &str) -> Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w: u16 = w
        .trim()
        .parse()
        .map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h: u16 = h
        .trim()
        .parse()
        .map_err(|e| format!("bad height {h:?}: {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be positive, got {w}x{h}"));
    }
    Ok((w, h))
}

fn parse_position(s: &str) -> Result<(u16, u16), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok((row, col))
}

fn parse_color(s: &str) -> Result<RinkColor, String> {
    RinkColor::from_str(s).ok_or_else(|| format!("unknown color {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("101x25"), Ok((101, 25)));
        assert_eq!(parse_size("77X21"), Ok((77, 21)));
        assert!(parse_size("0x25").is_err());
        assert!(parse_size("101").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn parses_positions_and_colors() {
        assert_eq!(parse_position("3,10"), Ok((3, 10)));
        assert!(parse_position("3").is_err());
        assert_eq!(parse_color("GREEN"), Ok(RinkColor::Green));
        assert!(parse_color("orange").is_err());
    }

    #[test]
    fn cli_defaults_to_one_standard_rink() {
        let cli = Cli::try_parse_from(["hockey-rink"]).unwrap();
        assert_eq!(cli.sizes, vec![(101, 25)]);
        assert_eq!(cli.render_options(), RenderOptions::default());
    }

    #[test]
    fn position_is_row_then_column() {
        let cli = Cli::try_parse_from(["hockey-rink", "--at", "2,8", "-c", "blue", "-i"]).unwrap();
        let opts = cli.render_options();
        assert_eq!(opts.origin, Some((8, 2)));
        assert_eq!(opts.color, Some(RinkColor::Blue));
        assert!(opts.bright);
    }
}
