//! The interactive stepping debugger.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::highlight::GridHighlighter;
use crate::serialize::{self, SessionImage};
use crate::session::{Session, Stop};
use std::io::{self, Write};
use std::path::PathBuf;
use torus_debug::TraceOutput;
use torus_engine::{Action, Step};
use torus_foundation::{Error, Position, Result};

/// Words accepted at the start of a command line.
pub const COMMANDS: &[&str] = &[
    "step", "s", "run", "continue", "c", "back", "b", "break", "delete", "stack", "grid",
    "output", "where", "trace", "save", "load", "reset", "help", "quit", "exit",
];

/// What `trace` should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceCommand {
    /// Start recording and echoing steps.
    On,
    /// Stop recording.
    Off,
    /// Format records as JSON.
    Json,
    /// Format records for people.
    Human,
    /// Show the newest records.
    Recent(usize),
}

/// A parsed debugger command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Take `n` steps.
    Step(u64),
    /// Run to halt, ignoring breakpoints.
    Run,
    /// Run to the next breakpoint or halt.
    Continue,
    /// Undo `n` steps.
    Back(usize),
    /// Set a breakpoint, or list them when no position is given.
    Break(Option<Position>),
    /// Remove a breakpoint.
    Delete(Position),
    /// Show the stack.
    Stack,
    /// Show the grid with the pointer highlighted.
    Grid,
    /// Show everything the program has printed.
    Output,
    /// Show the pointer and step count.
    Where,
    /// Control tracing.
    Trace(TraceCommand),
    /// Save the session to a file.
    Save(PathBuf),
    /// Load a session from a file.
    Load(PathBuf),
    /// Restart the program.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the debugger.
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (head, args.as_slice()) {
            ("step" | "s", []) => Self::Step(1),
            ("step" | "s", [n]) => Self::Step(parse_count(n)?),
            ("run", []) => Self::Run,
            ("continue" | "c", []) => Self::Continue,
            ("back" | "b", []) => Self::Back(1),
            ("back" | "b", [n]) => Self::Back(parse_count(n)?),
            ("break", []) => Self::Break(None),
            ("break", [x, y]) => Self::Break(Some(parse_position(x, y)?)),
            ("delete", [x, y]) => Self::Delete(parse_position(x, y)?),
            ("stack", []) => Self::Stack,
            ("grid", []) => Self::Grid,
            ("output", []) => Self::Output,
            ("where", []) => Self::Where,
            ("trace", ["on"]) => Self::Trace(TraceCommand::On),
            ("trace", ["off"]) => Self::Trace(TraceCommand::Off),
            ("trace", ["json"]) => Self::Trace(TraceCommand::Json),
            ("trace", ["human"]) => Self::Trace(TraceCommand::Human),
            ("trace", ["recent"]) => Self::Trace(TraceCommand::Recent(10)),
            ("trace", ["recent", n]) => Self::Trace(TraceCommand::Recent(parse_number(n)?)),
            ("save", [path]) => Self::Save(PathBuf::from(path)),
            ("load", [path]) => Self::Load(PathBuf::from(path)),
            ("reset", []) => Self::Reset,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (known, _) if COMMANDS.contains(&known) => {
                return Err(Error::internal(format!(
                    "bad arguments for `{known}` (try `help`)"
                )));
            }
            (unknown, _) => {
                return Err(Error::internal(format!(
                    "unknown command: {unknown} (try `help`)"
                )));
            }
        };

        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::internal(format!("expected a non-negative number, got `{text}`")))
}

fn parse_count<T: std::str::FromStr + PartialEq + From<u8>>(text: &str) -> Result<T> {
    let count: T = parse_number(text)?;
    if count == T::from(0u8) {
        return Err(Error::internal(format!(
            "expected a count of at least 1, got `{text}`"
        )));
    }
    Ok(count)
}

fn parse_position(x: &str, y: &str) -> Result<Position> {
    Ok(Position::new(parse_number(x)?, parse_number(y)?))
}

/// What the REPL should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Print this text.
    Print(String),
    /// Print nothing.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive debugger.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The program being debugged.
    session: Session,

    /// Renders the `grid` command.
    highlighter: GridHighlighter,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a debugger for `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a debugger with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(COMMANDS.iter().map(|&c| c.to_string()).collect());
        Self {
            editor,
            session,
            highlighter: GridHighlighter::new(),
            show_banner: true,
            prompt: "torus> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Renders the grid without escape codes.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.highlighter = GridHighlighter::plain();
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let input = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(&input) {
                Ok(Response::Print(text)) => println!("{text}"),
                Ok(Response::Silent) => {}
                Ok(Response::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        Ok(())
    }

    /// Parses and executes one command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is malformed or fails.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        match Command::parse(input)? {
            Some(command) => self.execute(command),
            None => Ok(Response::Silent),
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns step errors and file errors.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let text = match command {
            Command::Step(count) => {
                let mark = self.session.interpreter().output().len();
                match self.session.step_n(count)? {
                    Some(step) => self.with_emitted(mark, describe(&step)),
                    None => "program has halted".to_string(),
                }
            }
            Command::Run => {
                let mark = self.session.interpreter().output().len();
                self.session.run()?;
                let summary = format!("halted after {} steps", self.session.interpreter().steps());
                self.with_emitted(mark, summary)
            }
            Command::Continue => {
                let mark = self.session.interpreter().output().len();
                let summary = match self.session.continue_run()? {
                    Stop::Halted => {
                        format!("halted after {} steps", self.session.interpreter().steps())
                    }
                    Stop::Breakpoint(position) => format!("breakpoint at {position}"),
                };
                self.with_emitted(mark, summary)
            }
            Command::Back(count) => match self.session.back(count) {
                0 => "no history to step back through".to_string(),
                undone => format!("stepped back {undone}: {}", self.location()),
            },
            Command::Break(None) => {
                let breakpoints = self.session.breakpoints();
                if breakpoints.is_empty() {
                    "no breakpoints".to_string()
                } else {
                    breakpoints
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                }
            }
            Command::Break(Some(position)) => {
                if self.session.breakpoints_mut().add(position) {
                    format!("breakpoint set at {position}")
                } else {
                    format!("breakpoint already set at {position}")
                }
            }
            Command::Delete(position) => {
                if self.session.breakpoints_mut().remove(position) {
                    format!("breakpoint removed at {position}")
                } else {
                    format!("no breakpoint at {position}")
                }
            }
            Command::Stack => self.session.interpreter().stack().to_string(),
            Command::Grid => {
                let interpreter = self.session.interpreter();
                self.highlighter
                    .render(
                        interpreter.grid(),
                        interpreter.pointer().position,
                        self.session.breakpoints(),
                    )
                    .trim_end_matches('\n')
                    .to_string()
            }
            Command::Output => self.session.interpreter().output().to_string(),
            Command::Where => self.location(),
            Command::Trace(trace) => self.trace(trace),
            Command::Save(path) => {
                serialize::save_to_file(&SessionImage::capture(&self.session), &path)?;
                format!("saved to {}", path.display())
            }
            Command::Load(path) => {
                serialize::load_from_file(&path)?.apply(&mut self.session);
                format!("loaded {}: {}", path.display(), self.location())
            }
            Command::Reset => {
                self.session.reset();
                "program reset".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Response::Quit),
        };

        Ok(Response::Print(text))
    }

    fn trace(&mut self, command: TraceCommand) -> String {
        let tracer = self.session.tracer_mut();
        match command {
            TraceCommand::On => {
                tracer.enable();
                tracer.set_output(TraceOutput::Stderr);
                "tracing on".to_string()
            }
            TraceCommand::Off => {
                tracer.disable();
                tracer.set_output(TraceOutput::None);
                "tracing off".to_string()
            }
            TraceCommand::Json => {
                tracer.set_json_format(true);
                "trace format: json".to_string()
            }
            TraceCommand::Human => {
                tracer.set_json_format(false);
                "trace format: human".to_string()
            }
            TraceCommand::Recent(count) => {
                let records = tracer.buffer().recent(count);
                if records.is_empty() {
                    "no trace records".to_string()
                } else {
                    tracer.format_records(&records)
                }
            }
        }
    }

    /// Prefixes `summary` with any output produced since `mark`.
    fn with_emitted(&self, mark: usize, summary: String) -> String {
        match self.session.interpreter().output().get(mark..) {
            Some(emitted) if !emitted.is_empty() => format!("output: {emitted:?}\n{summary}"),
            _ => summary,
        }
    }

    fn location(&self) -> String {
        let interpreter = self.session.interpreter();
        let pointer = interpreter.pointer();
        let mut text = format!(
            "{} '{}' moving {}, {} steps",
            pointer.position,
            interpreter.grid().fetch(pointer.position),
            pointer.direction,
            interpreter.steps()
        );
        if interpreter.string_mode() {
            text.push_str(", string mode");
        }
        if interpreter.is_done() {
            text.push_str(", halted");
        }
        text
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mTorus debugger v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// One-line summary of a step.
fn describe(step: &Step) -> String {
    let what = match step.action {
        Action::Push(value) => format!("push {value}"),
        Action::Execute(opcode) => opcode.name().to_string(),
    };
    format!(
        "#{} {} {:?} {what} -> {} moving {}",
        step.number, step.position, step.cell, step.next, step.direction
    )
}

/// Prints an error, with its context, to stderr.
fn print_error(error: &Error) {
    match &error.context {
        Some(context) => eprintln!("\x1b[31mError: {error} ({context})\x1b[0m"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}

const HELP: &str = "\
step [n], s [n]    take n steps (default 1)
run                run to halt, ignoring breakpoints
continue, c        run to the next breakpoint or halt
back [n], b [n]    undo n steps (default 1)
break [X Y]        set a breakpoint at column X, row Y, or list breakpoints
delete X Y         remove a breakpoint
stack              show the stack, bottom first
grid               show the program with the pointer highlighted
output             show everything printed so far
where              show the pointer, direction, and step count
trace on|off       record steps and echo them to stderr
trace json|human   choose the trace format
trace recent [n]   show the newest n trace records (default 10)
save PATH          save the session to a file
load PATH          load a session from a file
reset              restart the program, keeping breakpoints
help               show this list
quit               leave the debugger";
