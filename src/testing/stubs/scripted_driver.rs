use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompt driver that replays scripted answers, for driving the dashboard
/// loop without a terminal.
pub struct ScriptedDriver {
    levels: RefCell<VecDeque<u64>>,
    confirms: RefCell<VecDeque<bool>>,
}

impl ScriptedDriver {
    pub fn new(levels: Vec<u64>, confirms: Vec<bool>) -> Self {
        Self {
            levels: RefCell::new(levels.into()),
            confirms: RefCell::new(confirms.into()),
        }
    }

    /// True once every scripted answer has been consumed.
    pub fn exhausted(&self) -> bool {
        self.levels.borrow().is_empty() && self.confirms.borrow().is_empty()
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_level(&self, title: &str, _help: &str, _default: u64, _min: u64, _max: u64) -> Result<u64> {
        match self.levels.borrow_mut().pop_front() {
            Some(level) => Ok(level),
            None => bail!("no scripted answer left for level prompt '{title}'"),
        }
    }

    fn ask_confirm(&self, title: &str, _default: bool) -> Result<bool> {
        match self.confirms.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer left for confirmation '{title}'"),
        }
    }
}
