//! Command-line surface and the validated configuration built from it.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::time::Duration;

use clap::Parser;

use crate::application::{RANDOM_PATTERN, StartPattern};
use crate::domain::{Rule, all_rules, presets, rule_by_name};
use crate::error::{LifeError, LifeResult};

/// Conway's Game of Life on an unbounded board
#[derive(Parser, Debug, Clone)]
#[command(name = "sparse-life", version, about = "Conway's Game of Life on an unbounded board")]
pub struct Cli {
    /// Open a window instead of drawing in the terminal
    #[arg(short, long)]
    pub graphical: bool,

    /// Starting pattern (see --extended-help)
    #[arg(short, long, default_value = RANDOM_PATTERN)]
    pub pattern: String,

    /// List patterns, rules and control keys, then exit
    #[arg(long)]
    pub extended_help: bool,

    /// Birth/survival rule
    #[arg(short, long, default_value = "conway")]
    pub rule: String,

    /// Seed for the random starting pattern
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between generations in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Stop after this many generations
    #[arg(long)]
    pub generations: Option<u64>,
}

/// Which renderer drives the loop
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderMode {
    Text,
    Graphical,
}

/// Settings resolved and checked before any simulation work starts
pub struct SimulationConfig {
    pub mode: RenderMode,
    pub start: StartPattern,
    pub rule: Box<dyn Rule>,
    pub seed: Option<u64>,
    pub delay: Duration,
    pub generations: Option<u64>,
}

impl SimulationConfig {
    /// Validate the parsed arguments
    pub fn from_cli(cli: &Cli) -> LifeResult<Self> {
        Self::resolve(cli, graphics_available())
    }

    fn resolve(cli: &Cli, graphics: bool) -> LifeResult<Self> {
        let mode = if cli.graphical {
            if !graphics {
                return Err(LifeError::RendererUnavailable);
            }
            RenderMode::Graphical
        } else {
            RenderMode::Text
        };

        let start = StartPattern::parse(&cli.pattern)?;
        let rule = rule_by_name(&cli.rule).ok_or_else(|| LifeError::UnknownRule(cli.rule.clone()))?;

        Ok(Self {
            mode,
            start,
            rule,
            seed: cli.seed,
            delay: Duration::from_millis(cli.delay_ms),
            generations: cli.generations,
        })
    }
}

/// Environment variables naming a display server on Unix desktops
const DISPLAY_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

/// Whether this build carries the windowed renderer and the host can open a window
pub fn graphics_available() -> bool {
    cfg!(feature = "graphics") && display_available()
}

/// Windows and macOS always have a window system; other Unix hosts need a display server
fn display_available() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    has_display_server(|key| std::env::var_os(key))
}

fn has_display_server(var: impl Fn(&str) -> Option<OsString>) -> bool {
    DISPLAY_VARS
        .iter()
        .any(|key| var(key).is_some_and(|value| !value.is_empty()))
}

/// Control keys of the graphical mode
pub const CONTROLS: &[(&str, &str)] = &[
    ("Arrows / WASD", "Pan"),
    ("Middle drag", "Pan"),
    ("+ / - / Wheel", "Zoom"),
    ("C", "Centre on live cells"),
    ("F", "Fit live cells"),
    ("Space", "Pause / resume"),
    ("N", "Single step while paused"),
    ("R", "Restart from the starting pattern"),
    ("] / [", "Faster / slower"),
    ("H", "Show / hide this help"),
    ("Esc / Q", "Quit"),
];

/// Text printed by --extended-help
pub fn extended_help() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Patterns:");
    let _ = writeln!(out, "  {:<14} Random fill of the board", RANDOM_PATTERN);
    for pattern in presets::ALL {
        let _ = writeln!(out, "  {:<14} {}", pattern.name, pattern.description);
    }

    let _ = writeln!(out, "\nRules:");
    for rule in all_rules() {
        let _ = writeln!(out, "  {:<14} {}", rule.name(), rule.description());
    }

    let _ = writeln!(out, "\nGraphical controls:");
    for (key, action) in CONTROLS {
        let _ = writeln!(out, "  {:<14} {}", key, action);
    }

    let _ = writeln!(out, "\nText mode: Ctrl+C stops the simulation.");
    let _ = writeln!(
        out,
        "Board size: pipe \"ROWS COLUMNS\" on stdin, otherwise the terminal size is used."
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sparse-life").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.graphical);
        assert_eq!(cli.pattern, "random");
        assert_eq!(cli.delay_ms, 500);

        let config = SimulationConfig::from_cli(&cli).unwrap();
        assert_eq!(config.mode, RenderMode::Text);
        assert!(matches!(config.start, StartPattern::Random));
        assert_eq!(config.rule.name(), "conway");
    }

    #[test]
    fn test_named_pattern_and_rule() {
        let cli = parse(&["-p", "gosper", "--rule", "highlife", "--seed", "4"]);
        let config = SimulationConfig::from_cli(&cli).unwrap();

        assert_eq!(config.start.name(), "gosper");
        assert_eq!(config.rule.name(), "highlife");
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let cli = parse(&["--pattern", "nonexistent"]);
        assert!(matches!(
            SimulationConfig::from_cli(&cli),
            Err(LifeError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let cli = parse(&["--rule", "brians-brain"]);
        assert!(matches!(SimulationConfig::from_cli(&cli), Err(LifeError::UnknownRule(_))));
    }

    #[test]
    fn test_graphical_requires_renderer() {
        let cli = parse(&["-g", "-p", "glider"]);
        assert!(matches!(
            SimulationConfig::resolve(&cli, false),
            Err(LifeError::RendererUnavailable)
        ));
        assert_eq!(
            SimulationConfig::resolve(&cli, true).map(|c| c.mode).ok(),
            Some(RenderMode::Graphical)
        );
    }

    #[test]
    fn test_text_mode_ignores_renderer() {
        let config = SimulationConfig::resolve(&parse(&["-p", "glider"]), false).unwrap();
        assert_eq!(config.mode, RenderMode::Text);
    }

    #[test]
    fn test_headless_host_has_no_display() {
        assert!(!has_display_server(|_| None));
        assert!(!has_display_server(|_| Some(OsString::new())));
    }

    #[test]
    fn test_display_server_detected() {
        assert!(has_display_server(|key| (key == "DISPLAY").then(|| OsString::from(":0"))));
        assert!(has_display_server(|key| {
            (key == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))
        }));
    }

    #[test]
    fn test_build_without_graphics_is_unavailable() {
        if !cfg!(feature = "graphics") {
            assert!(!graphics_available());
        }
    }

    #[test]
    fn test_extended_help_lists_everything() {
        let help = extended_help();
        for name in presets::list_names() {
            assert!(help.contains(name));
        }
        assert!(help.contains("random"));
        assert!(help.contains("Esc / Q"));
    }
}
