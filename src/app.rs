//! The dashboard: the widget tree, its sources, and whether it is ticking.

use std::time::Duration;

use crate::{
    collection::SourceRegistry,
    constants::DEFAULT_REFRESH_RATE,
    widgets::{RedrawSummary, Widget},
};

/// Settings that come from launch options or the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardConfig {
    pub update_rate: Duration,
    pub dot_marker: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            update_rate: DEFAULT_REFRESH_RATE,
            dot_marker: false,
        }
    }
}

pub struct Dashboard {
    pub config: DashboardConfig,
    root: Widget,
    sources: SourceRegistry,
    frozen: bool,
    ticks: u64,
    last_summary: RedrawSummary,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, root: Widget, sources: SourceRegistry) -> Self {
        Self {
            config,
            root,
            sources,
            frozen: false,
            ticks: 0,
            last_summary: RedrawSummary::default(),
        }
    }

    pub fn root(&self) -> &Widget {
        &self.root
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// How many ticks actually redrew the tree.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_summary(&self) -> RedrawSummary {
        self.last_summary
    }

    /// Redraw the whole tree once. Does nothing while frozen.
    pub fn tick(&mut self) -> Option<RedrawSummary> {
        if self.frozen {
            return None;
        }

        let summary = self.root.redraw();
        if summary.faults > 0 {
            log::debug!(
                "Tick {} had {} failed read(s) out of {}",
                self.ticks,
                summary.faults,
                summary.reads
            );
        }

        self.ticks += 1;
        self.last_summary = summary;
        Some(summary)
    }

    /// Toggles freezing and returns whether the dashboard is now frozen.
    pub fn toggle_frozen(&mut self) -> bool {
        self.frozen = !self.frozen;
        log::info!(
            "Dashboard {}",
            if self.frozen { "frozen" } else { "unfrozen" }
        );

        self.frozen
    }

    /// Drop accumulated instrument state (trails, chart history, attitude).
    pub fn reset_instruments(&mut self) {
        self.root.reset();
        log::info!("Reset {} widget(s)", self.root.count());
    }

    /// Run every source's connect hook once. Returns how many failed; the
    /// failures are logged and never stop the dashboard from starting.
    pub fn connect(&self) -> usize {
        let failures = self.root.connect();
        if failures > 0 {
            log::warn!("{failures} source(s) failed to connect");
        }

        failures
    }
}
