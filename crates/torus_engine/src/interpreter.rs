//! The interpreter: fetch, dispatch, move.
//!
//! Each [`Interpreter::step`] reads the cell under the instruction pointer,
//! applies it, and then moves the pointer one cell in whatever direction is
//! current after the instruction ran. [`Interpreter::execute`] repeats that
//! until `@` runs, with no step budget of its own; embedders that need one
//! drive [`Interpreter::step`] themselves.
//!
//! Under the default [`BoundsPolicy::Lenient`] every instruction is total:
//! empty pops yield 0, division and remainder by zero yield 0, and unknown
//! characters do nothing. Only [`BoundsPolicy::Strict`] can make a step fail.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use torus_foundation::{Direction, Error, ErrorContext, Position, Result, Value, cell};

use crate::config::{BoundsPolicy, EngineConfig};
use crate::grid::Grid;
use crate::opcode::Opcode;
use crate::pointer::InstructionPointer;
use crate::snapshot::Snapshot;
use crate::stack::Stack;


/// What a step did with the cell it fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// String mode pushed the cell's code point.
    Push(Value),
    /// The cell was executed as an instruction.
    Execute(Opcode),
}

/// Report of a single executed step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Step number, starting at 1.
    pub number: u64,
    /// The cell that was executed.
    pub position: Position,
    /// The character fetched from that cell.
    pub cell: char,
    /// How the cell was applied.
    pub action: Action,
    /// Direction of travel after the step.
    pub direction: Direction,
    /// Where the pointer is after the step.
    pub next: Position,
    /// Text appended to the output during the step.
    pub emitted: Option<String>,
    /// Cell overwritten by `p` during the step.
    pub stored: Option<(Position, char)>,
}

/// Side effects collected while dispatching one instruction.
#[derive(Default)]
struct Effects {
    emitted: Option<String>,
    stored: Option<(Position, char)>,
}

/// A Befunge-93 interpreter over one program.
///
/// Every piece of state is owned by the instance, so any number of
/// interpreters can run side by side.
pub struct Interpreter {
    grid: Grid,
    pointer: InstructionPointer,
    stack: Stack,
    string_mode: bool,
    finished: bool,
    output: String,
    steps: u64,
    rng: ChaCha8Rng,
    config: EngineConfig,
}

impl Interpreter {
    /// Creates an interpreter for `source` with the default configuration.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    /// Creates an interpreter for `source` with the given configuration.
    #[must_use]
    pub fn with_config(source: &str, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            grid: Grid::parse(source),
            pointer: InstructionPointer::new(),
            stack: Stack::new(),
            string_mode: false,
            finished: false,
            output: String::new(),
            steps: 0,
            rng,
            config,
        }
    }

    /// Runs until the program halts.
    ///
    /// A program that never reaches `@` never returns.
    ///
    /// # Errors
    ///
    /// Returns an error if a step fails under strict bounds checking.
    pub fn execute(&mut self) -> Result<()> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// Performs one fetch, dispatch, and move cycle.
    ///
    /// Returns `Ok(None)` without changing anything once the program has
    /// halted. After `@` the pointer stays on the `@` cell.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error if `g` or `p` addresses a missing cell
    /// under [`BoundsPolicy::Strict`]. The operands are consumed, the pointer
    /// stays on the failing cell, and the step is not counted.
    pub fn step(&mut self) -> Result<Option<Step>> {
        if self.finished {
            return Ok(None);
        }

        let position = self.pointer.position;
        let cell = self.grid.fetch(position);
        let mut effects = Effects::default();

        let action = if self.string_mode && cell != '"' {
            let value = cell::to_value(cell);
            self.stack.push(value);
            Action::Push(value)
        } else {
            let opcode = Opcode::decode(cell);
            if let Err(err) = self.dispatch(opcode, &mut effects) {
                return Err(err.with_context(
                    ErrorContext::new()
                        .with_position(position)
                        .with_steps(self.steps),
                ));
            }
            Action::Execute(opcode)
        };

        self.steps += 1;
        if !self.finished {
            self.pointer.advance(&self.grid);
        }

        Ok(Some(Step {
            number: self.steps,
            position,
            cell,
            action,
            direction: self.pointer.direction,
            next: self.pointer.position,
            emitted: effects.emitted,
            stored: effects.stored,
        }))
    }

    fn dispatch(&mut self, opcode: Opcode, effects: &mut Effects) -> Result<()> {
        match opcode {
            Opcode::Digit(d) => self.stack.push(Value::from(d)),

            // Arithmetic: `a` is the top of the stack, `b` the value below it.
            Opcode::Add => self.binary_op(Value::wrapping_add),
            Opcode::Sub => self.binary_op(|a, b| b.wrapping_sub(a)),
            Opcode::Mul => self.binary_op(Value::wrapping_mul),
            Opcode::Div => self.binary_op(|a, b| if a == 0 { 0 } else { b.wrapping_div(a) }),
            Opcode::Mod => self.binary_op(|a, b| if a == 0 { 0 } else { b.wrapping_rem(a) }),

            // Logic
            Opcode::Not => {
                let a = self.stack.pop();
                self.stack.push(Value::from(a == 0));
            }
            Opcode::Greater => self.binary_op(|a, b| Value::from(b > a)),

            // Direction
            Opcode::Left => self.pointer.direction = Direction::Left,
            Opcode::Right => self.pointer.direction = Direction::Right,
            Opcode::Up => self.pointer.direction = Direction::Up,
            Opcode::Down => self.pointer.direction = Direction::Down,
            Opcode::Random => {
                let index = self.rng.gen_range(0..Direction::ALL.len());
                self.pointer.direction = Direction::ALL[index];
            }
            Opcode::HorizontalIf => {
                self.pointer.direction = if self.stack.pop() == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
            }
            Opcode::VerticalIf => {
                self.pointer.direction = if self.stack.pop() == 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
            }
            // The regular post-dispatch move follows, so this skips one cell.
            Opcode::Trampoline => self.pointer.advance(&self.grid),

            Opcode::StringMode => self.string_mode = !self.string_mode,

            // Stack
            Opcode::Dup => {
                let a = self.stack.peek().unwrap_or(0);
                self.stack.push(a);
            }
            Opcode::Swap => {
                let a = self.stack.pop();
                let b = self.stack.pop();
                self.stack.push(a);
                self.stack.push(b);
            }
            Opcode::Discard => {
                self.stack.pop();
            }

            // Output
            Opcode::PrintInt => {
                let text = self.stack.pop().to_string();
                self.output.push_str(&text);
                effects.emitted = Some(text);
            }
            Opcode::PrintChar => {
                let c = cell::to_char(self.stack.pop());
                self.output.push(c);
                effects.emitted = Some(c.to_string());
            }

            // Storage
            Opcode::Put => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let v = self.stack.pop();
                effects.stored = self.put(x, y, v)?;
            }
            Opcode::Get => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.get(x, y)?;
                self.stack.push(value);
            }

            Opcode::Halt => self.finished = true,
            Opcode::Nop => {}
        }
        Ok(())
    }

    /// Pops `a`, then `b`, and pushes `f(a, b)`.
    fn binary_op(&mut self, f: impl FnOnce(Value, Value) -> Value) {
        let a = self.stack.pop();
        let b = self.stack.pop();
        self.stack.push(f(a, b));
    }

    fn get(&self, x: Value, y: Value) -> Result<Value> {
        match self.grid.locate(x, y) {
            Some(position) => Ok(cell::to_value(self.grid.fetch(position))),
            None => match self.config.bounds {
                BoundsPolicy::Lenient => Ok(0),
                BoundsPolicy::Strict => Err(Error::out_of_bounds(x, y)),
            },
        }
    }

    fn put(&mut self, x: Value, y: Value, v: Value) -> Result<Option<(Position, char)>> {
        match self.grid.locate(x, y) {
            Some(position) => {
                let c = cell::to_char(v);
                self.grid.set(position.x, position.y, c);
                Ok(Some((position, c)))
            }
            None => match self.config.bounds {
                BoundsPolicy::Lenient => Ok(None),
                BoundsPolicy::Strict => Err(Error::out_of_bounds(x, y)),
            },
        }
    }

    /// Returns true once `@` has executed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Returns everything written by `.` and `,` so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Takes the accumulated output, leaving it empty.
    ///
    /// Useful for streaming output while stepping.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Returns the value stack.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Returns the program grid, including any self-modifications.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the instruction pointer.
    #[must_use]
    pub fn pointer(&self) -> InstructionPointer {
        self.pointer
    }

    /// Returns true while string mode is active.
    #[must_use]
    pub fn string_mode(&self) -> bool {
        self.string_mode
    }

    /// Returns the number of steps executed.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Captures the complete interpreter state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            pointer: self.pointer,
            stack: self.stack.clone(),
            string_mode: self.string_mode,
            finished: self.finished,
            output: self.output.clone(),
            steps: self.steps,
            rng: self.rng.clone(),
        }
    }

    /// Replaces the interpreter state with a snapshot.
    ///
    /// The configuration is kept. The random generator is restored too, so a
    /// restored interpreter makes the same `?` choices it made the first time.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.pointer = snapshot.pointer;
        self.stack = snapshot.stack;
        self.string_mode = snapshot.string_mode;
        self.finished = snapshot.finished;
        self.output = snapshot.output;
        self.steps = snapshot.steps;
        self.rng = snapshot.rng;
    }

    /// Builds an interpreter from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, config: EngineConfig) -> Self {
        let mut interpreter = Self::with_config("", config);
        interpreter.restore(snapshot);
        interpreter
    }
}
