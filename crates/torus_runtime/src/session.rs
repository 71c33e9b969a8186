//! Session state for the debugger and the CLI.
//!
//! A [`Session`] owns one interpreter together with everything needed to
//! observe and steer it: the tracer, breakpoints, the step-back history, and
//! an optional step budget. Every step taken through the session is traced
//! and recorded.

use torus_debug::{Breakpoints, History, Tracer};
use torus_engine::{EngineConfig, Interpreter, Snapshot, Step};
use torus_foundation::{Error, ErrorContext, Position, Result};

/// Why [`Session::continue_run`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    /// The program executed `@`.
    Halted,
    /// The pointer reached a breakpoint; the cell has not run yet.
    Breakpoint(Position),
}

/// An interpreter plus its debugging state.
pub struct Session {
    /// The running program.
    interpreter: Interpreter,

    /// Program text, kept for `reset`.
    source: String,

    /// Where the program came from, used to label errors.
    name: Option<String>,

    /// Engine configuration, reused on `reset`.
    config: EngineConfig,

    /// Tracer for observability.
    tracer: Tracer,

    /// Cells that pause `continue_run`.
    breakpoints: Breakpoints,

    /// Snapshots taken before each step.
    history: History,

    /// Total steps allowed before `run` gives up.
    step_limit: Option<u64>,
}

impl Session {
    /// Creates a session for `source` with the default engine configuration.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    /// Creates a session for `source` with the given engine configuration.
    #[must_use]
    pub fn with_config(source: impl Into<String>, config: EngineConfig) -> Self {
        let source = source.into();
        Self {
            interpreter: Interpreter::with_config(&source, config.clone()),
            source,
            name: None,
            config,
            tracer: Tracer::disabled(),
            breakpoints: Breakpoints::new(),
            history: History::default(),
            step_limit: None,
        }
    }

    /// Sets the name used to label errors, usually the program's file path.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Replaces the step-back history. A zero-capacity history turns
    /// snapshotting off entirely.
    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// Limits the total number of steps `run` and `continue_run` may reach.
    #[must_use]
    pub const fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns the program text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the program name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns a mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the breakpoints.
    #[must_use]
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Returns a mutable reference to the breakpoints.
    pub fn breakpoints_mut(&mut self) -> &mut Breakpoints {
        &mut self.breakpoints
    }

    /// Returns the step-back history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step limit, if any.
    #[must_use]
    pub const fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Replaces the program text and name that `reset` restarts from.
    ///
    /// The running interpreter is left alone; pair with [`Session::restore`]
    /// to switch programs mid-run.
    pub fn set_program(&mut self, source: impl Into<String>, name: Option<String>) {
        self.source = source.into();
        self.name = name;
    }

    /// Sets or clears the step limit.
    pub fn set_step_limit(&mut self, limit: Option<u64>) {
        self.step_limit = limit;
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Takes one step. Returns `Ok(None)` once the program has halted.
    ///
    /// # Errors
    ///
    /// Returns the interpreter's error if the step fails. The state before
    /// the failing step stays in the history, so `back(1)` undoes the
    /// consumed operands.
    pub fn step(&mut self) -> Result<Option<Step>> {
        if self.interpreter.is_done() {
            return Ok(None);
        }

        if self.history.capacity() > 0 {
            self.history.push(self.interpreter.snapshot());
        }

        match self.interpreter.step() {
            Ok(Some(step)) => {
                self.tracer
                    .observe(&step, self.interpreter.stack().len());
                Ok(Some(step))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                self.tracer.fault(err.to_string());
                Err(self.label(err))
            }
        }
    }

    /// Takes up to `count` steps, stopping early at halt.
    ///
    /// Returns the last step taken. Breakpoints and the step limit do not
    /// apply to explicit stepping.
    ///
    /// # Errors
    ///
    /// Returns the first step error.
    pub fn step_n(&mut self, count: u64) -> Result<Option<Step>> {
        let mut last = None;
        for _ in 0..count {
            match self.step()? {
                Some(step) => last = Some(step),
                None => break,
            }
        }
        Ok(last)
    }

    /// Runs until the program halts, ignoring breakpoints.
    ///
    /// # Errors
    ///
    /// Returns a step error, or `StepLimit` if the limit is reached first.
    pub fn run(&mut self) -> Result<()> {
        while !self.interpreter.is_done() {
            self.check_limit()?;
            self.step()?;
        }
        Ok(())
    }

    /// Runs until the program halts or the pointer reaches a breakpoint.
    ///
    /// At least one step is taken before breakpoints are checked, so
    /// continuing from a breakpoint moves past it.
    ///
    /// # Errors
    ///
    /// Returns a step error, or `StepLimit` if the limit is reached first.
    pub fn continue_run(&mut self) -> Result<Stop> {
        let mut first = true;
        while !self.interpreter.is_done() {
            let position = self.interpreter.pointer().position;
            if !first && self.breakpoints.hit(position) {
                self.tracer.breakpoint_hit(position);
                return Ok(Stop::Breakpoint(position));
            }
            self.check_limit()?;
            self.step()?;
            first = false;
        }
        Ok(Stop::Halted)
    }

    /// Undoes up to `count` steps. Returns how many were undone.
    pub fn back(&mut self, count: usize) -> usize {
        let before = self.history.len();
        if let Some(snapshot) = self.history.rewind(count) {
            self.interpreter.restore(snapshot);
        }
        before - self.history.len()
    }

    /// Restarts the program from its original text.
    ///
    /// Breakpoints are kept; history and trace records are dropped.
    pub fn reset(&mut self) {
        self.interpreter = Interpreter::with_config(&self.source, self.config.clone());
        self.history.clear();
        self.tracer.clear();
    }

    /// Replaces the interpreter state with a snapshot and drops the history.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.interpreter.restore(snapshot);
        self.history.clear();
    }

    /// Captures the interpreter state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.interpreter.snapshot()
    }

    fn check_limit(&self) -> Result<()> {
        match self.step_limit {
            Some(limit) if self.interpreter.steps() >= limit => {
                let context = ErrorContext::new()
                    .with_position(self.interpreter.pointer().position)
                    .with_steps(self.interpreter.steps());
                Err(self.label(Error::step_limit(limit).with_context(context)))
            }
            _ => Ok(()),
        }
    }

    /// Attaches the program name to an error's context.
    fn label(&self, mut err: Error) -> Error {
        if let Some(name) = &self.name {
            err.context
                .get_or_insert_with(ErrorContext::new)
                .source = Some(name.clone());
        }
        err
    }
}
