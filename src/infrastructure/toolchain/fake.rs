//! Recording CommandRunner for tests

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::{CommandRunner, Invocation};
use crate::error::{SoupError, SoupResult};

type Effect = Box<dyn Fn()>;

/// Records every invocation; fails or runs a side effect per program
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failures: HashMap<String, i32>,
    effects: HashMap<String, Effect>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `code`
    pub fn failing(mut self, program: &str, code: i32) -> Self {
        self.failures.insert(program.to_string(), code);
        self
    }

    /// Run `effect` whenever `program` succeeds (e.g. create its outputs)
    pub fn on_success(mut self, program: &str, effect: impl Fn() + 'static) -> Self {
        self.effects.insert(program.to_string(), Box::new(effect));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|inv| inv.program.clone())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> SoupResult<()> {
        self.calls.borrow_mut().push(invocation.clone());

        if let Some(code) = self.failures.get(&invocation.program) {
            return Err(SoupError::ToolFailed {
                tool: invocation.program.clone(),
                code: Some(*code),
            });
        }
        if let Some(effect) = self.effects.get(&invocation.program) {
            effect();
        }
        Ok(())
    }
}
