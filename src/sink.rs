//! Destinations for emitted properties.

use crate::commands::{FileCommand, issue_command};
use crate::env_keys::{ENV_GITHUB_ENV, ENV_GITHUB_OUTPUT};
use crate::error::Result;
use std::io::{Stdout, Write};

pub trait Sink {
    fn emit(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Where a sink writes: the runner's command file, or legacy stdout commands
/// when the runner did not provide one.
#[derive(Debug)]
pub enum Channel<W> {
    File(FileCommand),
    Stream(W),
}

impl Channel<Stdout> {
    fn from_env(key: &str) -> Self {
        match FileCommand::from_env(key) {
            Some(file) => Channel::File(file),
            None => Channel::Stream(std::io::stdout()),
        }
    }
}

#[derive(Debug)]
pub struct EnvironmentSink<W = Stdout> {
    channel: Channel<W>,
}

impl EnvironmentSink {
    pub fn from_env() -> Self {
        Self::new(Channel::from_env(ENV_GITHUB_ENV))
    }
}

impl<W: Write> EnvironmentSink<W> {
    pub fn new(channel: Channel<W>) -> Self {
        Self { channel }
    }
}

impl<W: Write> Sink for EnvironmentSink<W> {
    fn emit(&mut self, name: &str, value: &str) -> Result<()> {
        match &mut self.channel {
            Channel::File(file) => file.append(name, value),
            Channel::Stream(out) => issue_command(out, "set-env", &[("name", name)], value),
        }
    }
}

#[derive(Debug)]
pub struct OutputSink<W = Stdout> {
    channel: Channel<W>,
}

impl OutputSink {
    pub fn from_env() -> Self {
        Self::new(Channel::from_env(ENV_GITHUB_OUTPUT))
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(channel: Channel<W>) -> Self {
        Self { channel }
    }
}

impl<W: Write> Sink for OutputSink<W> {
    fn emit(&mut self, name: &str, value: &str) -> Result<()> {
        match &mut self.channel {
            Channel::File(file) => file.append(name, value),
            Channel::Stream(out) => {
                writeln!(out)?;
                issue_command(out, "set-output", &[("name", name)], value)
            }
        }
    }
}

/// The pair of sinks a run may write to. Properties go to one of them,
/// the summary count always goes to `output`.
pub struct Sinks<E, O> {
    pub env: E,
    pub output: O,
}

impl Sinks<EnvironmentSink, OutputSink> {
    pub fn from_env() -> Self {
        Self {
            env: EnvironmentSink::from_env(),
            output: OutputSink::from_env(),
        }
    }
}
