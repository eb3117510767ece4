//! The text-generation backend collaborator.
//!
//! One blocking request per workflow invocation: prompt in, prose out.
//! No streaming. An empty response is valid at this layer; the workflows
//! decide whether it is fatal.

use crate::error::Result;

pub trait SpecBackend {
    fn run(&self, prompt: &str) -> Result<String>;
}

/// Adapter turning a closure into a backend, for tests and embedders
/// that already have the response in hand.
pub struct FnBackend<F>(pub F);

impl<F> SpecBackend for FnBackend<F>
where
    F: Fn(&str) -> Result<String>,
{
    fn run(&self, prompt: &str) -> Result<String> {
        (self.0)(prompt)
    }
}
