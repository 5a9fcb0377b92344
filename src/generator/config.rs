//! Generator configuration.

use super::record::EventRecord;
use super::trace::generate_event_logs;
use crate::utils::config::{DEFAULT_EVENT_TYPES, DEFAULT_NUM_LINES};
use crate::utils::error::GeneratorError;
use chrono::{Local, NaiveDateTime};
use rand::Rng;

/// Parameters for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Vocabulary of event labels
    pub event_types: Vec<String>,

    /// Target row count
    pub num_lines: usize,

    /// Reference "now"; `None` uses the local wall clock at generation time
    pub start: Option<NaiveDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            event_types: DEFAULT_EVENT_TYPES.iter().map(|s| s.to_string()).collect(),
            num_lines: DEFAULT_NUM_LINES,
            start: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_types = event_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_num_lines(mut self, num_lines: usize) -> Self {
        self.num_lines = num_lines;
        self
    }

    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Run the generator with this configuration
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<EventRecord>, GeneratorError> {
        let now = self.start.unwrap_or_else(|| Local::now().naive_local());
        generate_event_logs(self.event_types.as_slice(), self.num_lines, now, rng)
    }
}
