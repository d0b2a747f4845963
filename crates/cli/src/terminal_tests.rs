// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;
use std::io::Cursor;

fn terminal(input: &str) -> StdTerminal<Cursor<Vec<u8>>, Vec<u8>> {
    StdTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(terminal: &StdTerminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(terminal.writer().clone()).unwrap()
}

#[rstest]
#[case::unix("repeat\n", "repeat")]
#[case::windows("repeat\r\n", "repeat")]
#[case::empty("\n", "")]
#[case::no_terminator("2", "2")]
#[case::inner_spaces_kept(" 2 \n", " 2 ")]
fn read_line_strips_terminator(#[case] input: &str, #[case] expected: &str) {
    let mut term = terminal(input);
    assert_eq!(term.read_line().unwrap(), expected);
}

#[test]
fn test_read_line_reads_one_line_at_a_time() {
    let mut term = terminal("1\n\n3\n");
    assert_eq!(term.read_line().unwrap(), "1");
    assert_eq!(term.read_line().unwrap(), "");
    assert_eq!(term.read_line().unwrap(), "3");
}

#[test]
fn test_read_line_at_end_of_input_fails() {
    let mut term = terminal("");
    let err = term.read_line().unwrap_err();
    assert!(matches!(err, TerminalError::UnexpectedEof));
    assert_eq!(
        err.to_string(),
        "failed to read input: unexpected end of input"
    );
}

#[test]
fn test_clear_screen_writes_ansi() {
    let mut term = terminal("");
    term.clear_screen().unwrap();
    assert_eq!(output(&term), "\x1b[H\x1b[2J");
}

#[test]
fn test_clear_previous_line_writes_ansi() {
    let mut term = terminal("");
    term.clear_previous_line().unwrap();
    assert_eq!(output(&term), "\x1b[1A\x1b[2K\r");
}

#[test]
fn test_write_line_and_prompt() {
    let mut term = terminal("");
    term.write_line("cat").unwrap();
    term.write_prompt("> ").unwrap();
    assert_eq!(output(&term), "cat\n> ");
}

struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_reported() {
    let mut term = StdTerminal::new(Cursor::new(Vec::new()), BrokenWriter);
    let err = term.write_line("cat").unwrap_err();
    assert!(matches!(err, TerminalError::Write(_)));
}

#[test]
fn test_scripted_terminal_replays_input() {
    let mut term = ScriptedTerminal::new(["2", ""]);
    assert_eq!(term.read_line().unwrap(), "2");
    assert_eq!(term.pending_input(), 1);
    assert_eq!(term.read_line().unwrap(), "");
    assert!(matches!(
        term.read_line().unwrap_err(),
        TerminalError::UnexpectedEof
    ));
}

#[test]
fn test_scripted_terminal_records_events() {
    let mut term = ScriptedTerminal::new(["x"]);
    term.clear_screen().unwrap();
    term.write_line("cat").unwrap();
    term.write_prompt("> ").unwrap();
    term.read_line().unwrap();
    term.clear_previous_line().unwrap();
    assert_eq!(
        term.events(),
        &[
            TerminalEvent::ClearScreen,
            TerminalEvent::Line("cat".into()),
            TerminalEvent::Prompt("> ".into()),
            TerminalEvent::Input("x".into()),
            TerminalEvent::ClearPreviousLine,
        ]
    );
    assert_eq!(term.lines(), vec!["cat"]);
    assert_eq!(term.count(&TerminalEvent::ClearScreen), 1);
}
