use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::config::RunConfig;

/// Something that can answer a yes/no question.
pub trait Prompter {
    fn ask(&self, question: &str) -> bool;
}

/// Asks on the controlling terminal and answers on a single key press.
/// When stdin is not a terminal (piped input) it reads one line instead.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str) -> bool {
        print!("  {} {} ", question.bold(), "[y/N]".yellow());
        if io::stdout().flush().is_err() {
            return false;
        }

        if !io::stdin().is_terminal() {
            let mut answer = String::new();
            return match io::stdin().lock().read_line(&mut answer) {
                Ok(0) | Err(_) => false,
                Ok(_) => is_affirmative(&answer),
            };
        }

        let answer = match read_key() {
            Ok(key) => is_affirmative_key(&key),
            Err(e) => {
                tracing::debug!(error = %e, "key read failed");
                false
            }
        };
        println!("{}", if answer { "y" } else { "n" });
        answer
    }
}

/// Wait for one key press in raw mode. Raw mode is always left again.
fn read_key() -> io::Result<KeyEvent> {
    terminal::enable_raw_mode()?;
    let key = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    key
}

/// Only a single `y` or `Y` counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Key-press form of [`is_affirmative`]. Ctrl-Y is not a yes.
pub fn is_affirmative_key(key: &KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
}

/// Decide whether a destructive step may go ahead. Dry runs and `--yes`
/// never reach the prompter.
pub fn confirm(config: &RunConfig, prompter: &dyn Prompter, question: &str) -> bool {
    if config.skip_confirmation || config.dry_run {
        return true;
    }
    prompter.ask(question)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Prompter;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records every question it was asked.
    /// Runs out of answers as "no".
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        answers: RefCell<VecDeque<bool>>,
        pub(crate) asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                asked: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn times_asked(&self) -> usize {
            self.asked.borrow().len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&self, question: &str) -> bool {
            self.asked.borrow_mut().push(question.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }
    }
}
