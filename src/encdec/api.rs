//! # API Facade
//!
//! [`transform`] is the cipher dispatcher: a pure function from a
//! [`CipherRequest`] to the transformed text. [`CipherApi`] wraps it with the
//! harness concerns (configured defaults, reading input, writing output files)
//! and returns structured results instead of printing.
//!
//! The API never writes to stdout or stderr and never exits the process.

use crate::config::{EncdecConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::io::{self, InputSource, OutputTarget};
use crate::model::{Algorithm, CipherRequest, Direction};
use log::debug;
use std::path::PathBuf;

/// Applies the request's algorithm, in the request's direction, to its text.
pub fn transform(request: &CipherRequest) -> String {
    request
        .algorithm
        .engine()
        .apply(&request.text, request.key, request.direction)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Text meant for the console; `None` when it went to a file.
    pub output: Option<String>,
    pub written_to: Option<PathBuf>,
    pub config_entries: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_written_to(mut self, path: PathBuf) -> Self {
        self.written_to = Some(path);
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.config_entries = entries;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// One cipher run as requested on the command line, before the input is read.
#[derive(Debug, Clone)]
pub struct CipherJob {
    pub input: InputSource,
    pub output: OutputTarget,
    pub key: i64,
    pub direction: Direction,
    pub algorithm: Algorithm,
}

pub struct CipherApi {
    config: EncdecConfig,
    config_dir: PathBuf,
}

impl CipherApi {
    pub fn new(config: EncdecConfig, config_dir: PathBuf) -> Self {
        Self { config, config_dir }
    }

    pub fn config_values(&self) -> &EncdecConfig {
        &self.config
    }

    /// Picks the algorithm for a run: the given token, or the configured
    /// default when none was given.
    pub fn resolve_algorithm(&self, token: Option<&str>) -> Result<Algorithm> {
        match token {
            Some(token) => Algorithm::from_token(token, self.config.strict_algorithm),
            None => Ok(self.config.default_algorithm),
        }
    }

    pub fn run(&self, job: &CipherJob) -> Result<CmdResult> {
        let text = io::read_input(&job.input, &self.config.line_separator)?;
        let request = CipherRequest::new(text, job.key, job.direction, job.algorithm);
        debug!(
            "Transforming {} chars: mode={} alg={} key={}",
            request.text.chars().count(),
            request.direction,
            request.algorithm,
            request.key
        );

        let output = transform(&request);
        match &job.output {
            OutputTarget::Console => Ok(CmdResult::default().with_output(output)),
            OutputTarget::File(path) => {
                io::write_file(path, &output)?;
                Ok(CmdResult::default().with_written_to(path.clone()))
            }
        }
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        match action {
            ConfigAction::ShowAll => {
                let mut result = CmdResult::default().with_config_entries(self.config.entries());
                result.add_message(CmdMessage::info(format!(
                    "Config file: {}",
                    self.config_dir.join(CONFIG_FILENAME).display()
                )));
                Ok(result)
            }
            ConfigAction::ShowKey(key) => {
                let value = self.config.get(&key)?;
                Ok(CmdResult::default().with_config_entries(vec![(key, value)]))
            }
            ConfigAction::Set(key, value) => {
                let mut updated = self.config.clone();
                updated.set(&key, &value)?;
                updated.save(&self.config_dir)?;
                self.config = updated;

                let shown = self.config.get(&key)?;
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                Ok(result)
            }
        }
    }
}
