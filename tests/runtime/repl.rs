//! Debugger REPL integration tests
//!
//! Drives the REPL through a scripted line editor.

use torus_foundation::Result;
use torus_runtime::{LineEditor, ReadResult, Repl, Response, Session};

const HELLO: &str = include_str!("../../programs/hello.bf");

struct ScriptedEditor {
    lines: std::vec::IntoIter<&'static str>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: Vec<&'static str>) -> Self {
        Self {
            lines: lines.into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(match self.lines.next() {
            Some("^C") => ReadResult::Interrupted,
            Some(line) => ReadResult::Line(line.to_string()),
            None => ReadResult::Eof,
        })
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl(lines: Vec<&'static str>) -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(lines), Session::new(HELLO))
        .without_banner()
        .without_color()
}

#[test]
fn scripted_debugging_session() {
    let mut repl = repl(vec![
        "break 18 0",
        "continue",
        "^C",
        "continue",
        "back 3",
        "run",
        "quit",
        "step",
    ]);
    repl.run().unwrap();

    let interpreter = repl.session().interpreter();
    assert!(interpreter.is_done());
    assert_eq!(interpreter.output(), "Hello, World!");
}

#[test]
fn eof_ends_session() {
    let mut repl = repl(vec!["step 5"]);
    repl.run().unwrap();
    assert_eq!(repl.session().interpreter().steps(), 5);
}

#[test]
fn responses_describe_state() {
    let mut repl = repl(vec![]);
    assert_eq!(repl.eval("").unwrap(), Response::Silent);
    assert_eq!(repl.eval("quit").unwrap(), Response::Quit);

    let Response::Print(text) = repl.eval("run").unwrap() else {
        panic!("run should print");
    };
    assert!(text.starts_with("output: \"Hello, World!\""));
    assert!(text.ends_with("halted after 98 steps"));

    let Response::Print(text) = repl.eval("where").unwrap() else {
        panic!("where should print");
    };
    assert_eq!(text, "(20, 0) '@' moving right, 98 steps, halted");
}

#[test]
fn help_lists_every_command() {
    let mut repl = repl(vec![]);
    let Response::Print(text) = repl.eval("help").unwrap() else {
        panic!("help should print");
    };
    for command in ["step", "run", "continue", "back", "break", "delete", "trace", "save"] {
        assert!(text.contains(command), "missing {command}");
    }
}
