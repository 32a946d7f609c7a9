//! Host metrics through sysinfo, as percentages or load averages.

use std::{cell::RefCell, num::NonZeroU64};

use sysinfo::System;

use super::{DataSource, SourceError, Value};

/// Which host metric a [`SystemSource`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMetric {
    /// Global CPU usage, in percent.
    Cpu,
    /// RAM in use, in percent.
    Memory,
    /// Swap in use, in percent.
    Swap,
    LoadAvgOne,
    LoadAvgFive,
    LoadAvgFifteen,
}

impl SystemMetric {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().trim() {
            "cpu" => Some(SystemMetric::Cpu),
            "mem" | "memory" | "ram" => Some(SystemMetric::Memory),
            "swap" => Some(SystemMetric::Swap),
            "load_avg_1" | "load1" => Some(SystemMetric::LoadAvgOne),
            "load_avg_5" | "load5" => Some(SystemMetric::LoadAvgFive),
            "load_avg_15" | "load15" => Some(SystemMetric::LoadAvgFifteen),
            _ => None,
        }
    }
}

#[inline]
fn usage_percent(used: u64, total: u64) -> Option<f64> {
    NonZeroU64::new(total).map(|total| used as f64 / total.get() as f64 * 100.0)
}

/// Reads one metric from a [`System`] it keeps refreshed.
pub struct SystemSource {
    name: String,
    metric: SystemMetric,
    sys: RefCell<System>,
}

impl SystemSource {
    pub fn new<N: Into<String>>(name: N, metric: SystemMetric) -> Self {
        Self {
            name: name.into(),
            metric,
            sys: RefCell::new(System::new()),
        }
    }
}

impl DataSource for SystemSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        let mut sys = self.sys.borrow_mut();

        let value = match self.metric {
            SystemMetric::Cpu => {
                sys.refresh_cpu_usage();
                Some(f64::from(sys.global_cpu_usage()))
            }
            SystemMetric::Memory => {
                sys.refresh_memory();
                usage_percent(sys.used_memory(), sys.total_memory())
            }
            SystemMetric::Swap => {
                sys.refresh_memory();
                usage_percent(sys.used_swap(), sys.total_swap())
            }
            SystemMetric::LoadAvgOne => Some(System::load_average().one),
            SystemMetric::LoadAvgFive => Some(System::load_average().five),
            SystemMetric::LoadAvgFifteen => Some(System::load_average().fifteen),
        };

        Ok(match value {
            Some(value) => Value::Number(value),
            None => Value::no_data("not reported by this system"),
        })
    }

    /// CPU usage is a delta between two refreshes, so take the first one now.
    fn connect(&self) -> Result<(), SourceError> {
        if self.metric == SystemMetric::Cpu {
            self.sys.borrow_mut().refresh_cpu_usage();
        }

        Ok(())
    }
}
