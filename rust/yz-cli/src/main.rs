//! yz: command-line Yahtzee scorer.
//!
//! Subcommands:
//! - score
//! - table
//! - categories

use std::env;
use std::process;

use yz_core::{Category, Config, InvalidRollsError, OutputFormat, NUM_CATS};
use yz_logging::{NdjsonWriter, ScoreEventV1};

/// Exit status when the dice were rejected. The score printed is still 0.
const EXIT_INVALID_ROLLS: i32 = 2;

/// Options shared by `yz score` and `yz table`.
#[derive(Default)]
struct ScoreArgs {
    dice: Vec<i32>,
    category: Option<Category>,
    config_path: Option<String>,
    log_path: Option<String>,
    json: bool,
}

fn parse_score_args(cmd: &str, args: &[String]) -> ScoreArgs {
    let mut out = ScoreArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--category" | "-c" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("Missing value for --category");
                    process::exit(1);
                };
                out.category = Some(name.parse().unwrap_or_else(|e| {
                    eprintln!("{e}");
                    process::exit(1);
                }));
                i += 2;
            }
            "--config" => {
                out.config_path = Some(args.get(i + 1).cloned().unwrap_or_else(|| {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }));
                i += 2;
            }
            "--log" => {
                out.log_path = Some(args.get(i + 1).cloned().unwrap_or_else(|| {
                    eprintln!("Missing value for --log");
                    process::exit(1);
                }));
                i += 2;
            }
            "--json" => {
                out.json = true;
                i += 1;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option for `yz {cmd}`: {other}");
                eprintln!("Run `yz {cmd} --help` for usage.");
                process::exit(1);
            }
            // Anything else is a die; range checks are the scorer's job.
            other => {
                let d = other.parse::<i32>().unwrap_or_else(|_| {
                    eprintln!("Invalid die value: {other}");
                    process::exit(1);
                });
                out.dice.push(d);
                i += 1;
            }
        }
    }
    out
}

/// Resolved run settings: config file first, then command-line overrides.
struct Session {
    format: OutputFormat,
    log: Option<NdjsonWriter>,
    /// Explain rejected rolls on stderr; otherwise only the exit status reports them.
    debug: bool,
}

impl Session {
    fn open(args: &ScoreArgs) -> Self {
        let cfg = match &args.config_path {
            Some(p) => Config::load(p).unwrap_or_else(|e| {
                eprintln!("Failed to load config: {e}");
                process::exit(1);
            }),
            None => Config::default(),
        };

        let debug = cfg.logging.debug_log || yz_core::debug_log_enabled();

        let format = if args.json {
            OutputFormat::Json
        } else {
            cfg.output.format
        };

        let log_path = args.log_path.clone().or(cfg.logging.ndjson_path);
        let log = log_path.map(|p| {
            NdjsonWriter::open_append_with_flush(&p, cfg.logging.flush_every_lines)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to open score log {p}: {e}");
                    process::exit(1);
                })
        });

        Self { format, log, debug }
    }

    fn record(
        &mut self,
        dice: &[i32],
        cat: Category,
        score: u32,
        err: Option<&InvalidRollsError>,
    ) {
        let Some(w) = self.log.as_mut() else {
            return;
        };
        let ev = ScoreEventV1::new(dice, cat.name(), score, err.map(|e| e.to_string()));
        if let Err(e) = w.write_event(&ev) {
            eprintln!("Failed to write score event: {e}");
        }
    }

    fn report_invalid(&self, dice: &[i32], cat: Option<Category>, err: &InvalidRollsError) {
        if self.debug {
            eprintln!("{}", yz_core::invalid_rolls_message(dice, cat, err));
        }
    }

    fn finish(mut self, status: i32) -> ! {
        if let Some(w) = self.log.as_mut() {
            if let Err(e) = w.flush() {
                eprintln!("Failed to flush score log: {e}");
            }
        }
        process::exit(status);
    }
}

fn cmd_score(args: &[String]) {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!(
            r#"yz score

USAGE:
    yz score D1 D2 D3 D4 D5 --category NAME [--config PATH] [--log PATH] [--json]

OPTIONS:
    -c, --category NAME   Category to score (see `yz categories`) (required)
    --config PATH         Path to YAML config
    --log PATH            Append an NDJSON score event to PATH
    --json                Print JSON instead of plain text

Invalid dice print a score of 0 and exit with status 2. The reason is
printed on stderr when logging.debug_log or YZ_DEBUG_LOG=1 is set.
"#
        );
        return;
    }

    let args = parse_score_args("score", args);
    let Some(cat) = args.category else {
        eprintln!("Missing --category");
        process::exit(1);
    };
    let mut session = Session::open(&args);

    let (score, err) = match yz_core::score(&args.dice, cat) {
        Ok(s) => (s, None),
        Err(e) => (0, Some(e)),
    };
    session.record(&args.dice, cat, score, err.as_ref());

    match session.format {
        OutputFormat::Text => println!("{score}"),
        OutputFormat::Json => {
            let v = serde_json::json!({
                "dice": args.dice,
                "category": cat,
                "score": score,
                "error": err.as_ref().map(|e| e.to_string()),
            });
            println!("{v}");
        }
    }

    match err {
        Some(e) => {
            session.report_invalid(&args.dice, Some(cat), &e);
            session.finish(EXIT_INVALID_ROLLS);
        }
        None => session.finish(0),
    }
}

fn cmd_table(args: &[String]) {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!(
            r#"yz table

USAGE:
    yz table D1 D2 D3 D4 D5 [--config PATH] [--log PATH] [--json]

OPTIONS:
    --config PATH   Path to YAML config
    --log PATH      Append one NDJSON score event per category to PATH
    --json          Print a JSON object keyed by category name
"#
        );
        return;
    }

    let args = parse_score_args("table", args);
    if args.category.is_some() {
        eprintln!("`yz table` scores every category; drop --category");
        process::exit(1);
    }
    let mut session = Session::open(&args);

    let (scores, err) = match yz_core::validate_rolls(&args.dice) {
        Ok(dice) => (yz_core::scores_for_dice(&dice), None),
        Err(e) => ([0u32; NUM_CATS], Some(e)),
    };
    for cat in Category::ALL {
        session.record(&args.dice, cat, scores[cat.index() as usize], err.as_ref());
    }

    match session.format {
        OutputFormat::Text => {
            for cat in Category::ALL {
                println!("{:<15} {}", cat.name(), scores[cat.index() as usize]);
            }
        }
        OutputFormat::Json => {
            let mut m = serde_json::Map::new();
            for cat in Category::ALL {
                m.insert(cat.name().to_string(), scores[cat.index() as usize].into());
            }
            println!("{}", serde_json::Value::Object(m));
        }
    }

    match err {
        Some(e) => {
            session.report_invalid(&args.dice, None, &e);
            session.finish(EXIT_INVALID_ROLLS);
        }
        None => session.finish(0),
    }
}

fn cmd_categories() {
    for cat in Category::ALL {
        println!("{:>2}  {}", cat.index(), cat.name());
    }
}

fn print_help() {
    eprintln!(
        r#"yz - Yahtzee scorer

USAGE:
    yz <COMMAND> [OPTIONS]

COMMANDS:
    score        Score five dice under one category
    table        Score five dice under every category
    categories   List category names

OPTIONS:
    -h, --help       Print this help message
    -V, --version    Print version information

ENVIRONMENT:
    YZ_DEBUG_LOG=1   Explain rejected rolls on stderr (same as logging.debug_log)

Run `yz <COMMAND> --help` for command-specific options.
"#
    );
}

fn print_version() {
    println!("yz {}", yz_core::VERSION);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "table" => {
            cmd_table(&args[2..]);
        }
        "categories" => {
            cmd_categories();
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run `yz --help` for usage.");
            process::exit(1);
        }
    }
}
