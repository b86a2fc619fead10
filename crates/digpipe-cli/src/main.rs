//! digpipe - turn digit streams into timed input logs.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, InspectArgs, RenderArgs};

/// Generate digit tapes and render them as device input logs.
#[derive(Debug, Parser)]
#[command(name = "digpipe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a digit tape
    Generate(GenerateArgs),

    /// Render a tape to an action log
    Render(RenderArgs),

    /// Summarize a tape's header and stored chunks
    Inspect(InspectArgs),
}

/// Log to stderr so a stdout action log stays clean.
///
/// `RUST_LOG` overrides the `-v` level when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => commands::generate::run(&args),
        Command::Render(args) => commands::render::run(&args),
        Command::Inspect(args) => commands::inspect::run(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digpipe_engine::FrameOrigin;
    use digpipe_sink::OutputTarget;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("digpipe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn generate_defaults() {
        let cli = parse(&["generate", "--digits", "50", "--out", "tape"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let config = args.config();
        assert_eq!(config.source, "pi");
        assert_eq!(config.total_digits, 50);
        assert_eq!(config.chunk_size, 1_000_000);
        assert_eq!(config.tape_path, std::path::PathBuf::from("tape"));
    }

    #[test]
    fn generate_requires_digits_and_out() {
        assert!(Cli::try_parse_from(["digpipe", "generate", "--out", "t"]).is_err());
        assert!(Cli::try_parse_from(["digpipe", "generate", "--digits", "10"]).is_err());
    }

    #[test]
    fn render_defaults() {
        let cli = parse(&["render", "--tape", "t"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.config();
        assert_eq!(config.mapper, "gba-tenkey");
        assert_eq!(config.sink, "frame-log");
        assert_eq!(config.start_chunk, 0);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.timing.hold_frames, 5);
        assert_eq!(config.timing.release_frames, 5);
        assert_eq!(config.frame_origin, FrameOrigin::Restart);
    }

    #[test]
    fn render_all_flags() {
        let cli = parse(&[
            "-vv",
            "render",
            "--tape",
            "t",
            "--start-chunk",
            "3",
            "--out",
            "run.log",
            "--hold-frames",
            "2",
            "--release-frames",
            "4",
            "--absolute-frames",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.config();
        assert_eq!(config.start_chunk, 3);
        assert_eq!(config.output, OutputTarget::File("run.log".into()));
        assert_eq!(config.timing.hold_frames, 2);
        assert_eq!(config.timing.release_frames, 4);
        assert_eq!(config.frame_origin, FrameOrigin::Absolute);
    }

    #[test]
    fn unknown_names_surface_as_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let tape = dir.path().join("tape");
        let tape = tape.to_str().unwrap();

        let cli = parse(&[
            "generate",
            "--source",
            "invalid-source",
            "--digits",
            "10",
            "--out",
            tape,
        ]);
        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("unknown source 'invalid-source'"));

        let cli = parse(&["render", "--tape", tape, "--mapper", "invalid-mapper"]);
        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("unknown mapper 'invalid-mapper'"));
    }

    #[test]
    fn generate_then_inspect() {
        let dir = tempfile::TempDir::new().unwrap();
        let tape = dir.path().join("tape");
        let tape = tape.to_str().unwrap();

        run(parse(&["generate", "--digits", "20", "--chunk-size", "10", "--out", tape])).unwrap();
        run(parse(&["inspect", "--tape", tape])).unwrap();

        let log = dir.path().join("out.log");
        run(parse(&["render", "--tape", tape, "--out", log.to_str().unwrap()])).unwrap();
        assert_eq!(std::fs::read_to_string(log).unwrap().lines().count(), 40);
    }

    #[test]
    fn render_missing_tape_mentions_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let tape = dir.path().join("missing");
        let err = run(parse(&["render", "--tape", tape.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
