use std::time::{Duration, Instant};

use crate::game::TickReport;

/// Running totals for one simulation session
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u64,
    pub deaths: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            deaths: 0,
        }
    }

    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.food_eaten += report.food_eaten() as u64;
        self.deaths += report.deaths() as u64;
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
