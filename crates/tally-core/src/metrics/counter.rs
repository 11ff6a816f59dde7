//! Labelled monotonic counter.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::registry::Collector;
use super::text::{validate_label_name, validate_metric_name, write_header, write_sample};
use crate::error::{Result, TallyError};

/// A family of counters sharing a name and an ordered list of label names.
///
/// Each distinct tuple of label values owns an independent `AtomicU64`,
/// created lazily on first observation. Values never decrease.
#[derive(Debug)]
pub struct CounterVec {
    name: String,
    help: String,
    label_names: Vec<String>,
    map: DashMap<Vec<String>, AtomicU64>,
}

impl CounterVec {
    pub fn new(name: &str, help: &str, label_names: &[&str]) -> Result<Self> {
        validate_metric_name(name)?;
        for (i, l) in label_names.iter().enumerate() {
            validate_label_name(l)?;
            if label_names[..i].contains(l) {
                return Err(TallyError::Config(format!(
                    "duplicate label name {l:?} on metric {name}"
                )));
            }
        }
        Ok(Self {
            name: name.to_string(),
            help: help.to_string(),
            label_names: label_names.iter().map(|l| l.to_string()).collect(),
            map: DashMap::new(),
        })
    }

    /// Increment by 1. Returns `false` (and records nothing) when the number
    /// of values does not match the declared labels.
    pub fn inc(&self, values: &[&str]) -> bool {
        self.add(values, 1)
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, values: &[&str], v: u64) -> bool {
        if values.len() != self.label_names.len() {
            return false;
        }
        let key: Vec<String> = values.iter().map(|v| v.to_string()).collect();

        // Fast path: existing series only needs a shard read lock.
        if let Some(counter) = self.map.get(&key) {
            counter.fetch_add(v, Ordering::Relaxed);
            return true;
        }
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
        true
    }

    /// Current value for one label combination (0 if never observed).
    pub fn get(&self, values: &[&str]) -> u64 {
        let key: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Snapshot of all series, sorted by label values.
    pub fn samples(&self) -> Vec<(Vec<String>, u64)> {
        let mut out: Vec<(Vec<String>, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        out.sort();
        out
    }
}

impl Collector for CounterVec {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, out: &mut String) {
        write_header(out, &self.name, &self.help, "counter");
        for (values, count) in self.samples() {
            let labels: Vec<(&str, &str)> = self
                .label_names
                .iter()
                .map(String::as_str)
                .zip(values.iter().map(String::as_str))
                .collect();
            write_sample(out, &self.name, &labels, count);
        }
    }
}
