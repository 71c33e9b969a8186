//! Torus CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use torus_debug::{History, Tracer, TracerConfig};
use torus_engine::{BoundsPolicy, EngineConfig};
use torus_foundation::{Error, cell};
use torus_runtime::{Repl, Session};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    debug: bool,
    seed: Option<u64>,
    max_steps: Option<u64>,
    strict: bool,
    // Debug flags
    trace: bool,
    trace_json: bool,
    dump_state: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-d" | "--debug" => config.debug = true,
            "--strict" => config.strict = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "--dump-state" => config.dump_state = true,
            "--seed" => config.seed = Some(parse_value("--seed", args.next())?),
            "--max-steps" => config.max_steps = Some(parse_value("--max-steps", args.next())?),
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ if config.file.is_some() => {
                return Err(format!("unexpected argument: {arg}").into());
            }
            _ => config.file = Some(PathBuf::from(&arg)),
        }
    }

    Ok(config)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, Box<dyn std::error::Error>> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid {flag} value: {value}").into())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("torus {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(file) = config.file.as_ref() else {
        return Err("missing program file (try --help)".into());
    };

    let source = read_program(file)?;

    let session = build_session(&config, source, file);

    if config.debug {
        let mut repl = Repl::new(session)?;
        repl.run()?;
        return Ok(());
    }

    let mut session = session.with_history(History::new(0));
    let result = session.run();

    let mut stdout = io::stdout().lock();
    stdout.write_all(session.interpreter().output().as_bytes())?;
    stdout.flush()?;

    if config.dump_state {
        dump_state(&session);
    }

    result.map_err(|e| labeled(&e).into())
}

/// Reads a program file. Files that are not UTF-8 load one Latin-1 cell per byte.
fn read_program(file: &Path) -> Result<String, Error> {
    let bytes = fs::read(file)
        .map_err(|e| Error::io(format!("failed to read '{}': {e}", file.display())))?;
    Ok(cell::decode_source(&bytes).into_owned())
}

fn build_session(config: &CliConfig, source: String, file: &Path) -> Session {
    let mut engine = EngineConfig::new();
    if let Some(seed) = config.seed {
        engine = engine.with_seed(seed);
    }
    if config.strict {
        engine = engine.with_bounds(BoundsPolicy::Strict);
    }

    let mut session = Session::with_config(source, engine).with_name(file.display().to_string());

    if config.trace {
        let mut tracer_config = TracerConfig::new().enabled().to_stderr();
        if config.trace_json {
            tracer_config = tracer_config.json();
        }
        session = session.with_tracer(Tracer::new(tracer_config));
    }

    if let Some(limit) = config.max_steps {
        session = session.with_step_limit(limit);
    }

    session
}

/// Renders an error together with where it happened.
fn labeled(error: &Error) -> String {
    match &error.context {
        Some(context) => format!("{error} ({context})"),
        None => error.to_string(),
    }
}

fn dump_state(session: &Session) {
    let interpreter = session.interpreter();
    let pointer = interpreter.pointer();
    eprintln!("\x1b[1;36m=== Interpreter State ===\x1b[0m");
    eprintln!("Pointer: {} moving {}", pointer.position, pointer.direction);
    eprintln!("Stack: {}", interpreter.stack());
    eprintln!("Steps: {}", interpreter.steps());
    eprintln!("String mode: {}", interpreter.string_mode());
    eprintln!("Halted: {}", interpreter.is_done());
}

fn print_help() {
    println!(
        "\x1b[1mTorus\x1b[0m - Befunge-93 interpreter and debugger

\x1b[1mUSAGE:\x1b[0m
    torus [OPTIONS] FILE

\x1b[1mARGUMENTS:\x1b[0m
    FILE               Befunge-93 program to run

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -d, --debug        Open the program in the stepping debugger
    --seed N           Seed the random direction instruction `?`
    --max-steps N      Fail if the program has not halted after N steps
    --strict           Fail on `g`/`p` outside the program grid

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Trace every step to stderr
    --trace-json       Trace every step to stderr as JSON lines
    --dump-state       Print pointer, stack, and step count after the run

\x1b[1mEXAMPLES:\x1b[0m
    torus programs/hello.bf                 Run a program
    torus --seed 7 --max-steps 10000 a.bf   Reproducible, bounded run
    torus -d programs/sieve.bf              Step through a program

Type `help` inside the debugger for its commands."
    );
}
