use std::time::Duration;

#[cfg(feature = "serde")]
use crate::types::{Result, WizardError};

/// Delays used by the simulated jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationTimings {
    /// Single delay before an invoice counts as generated
    pub generation_delay_ms: u64,
    /// Delay after each progress report of a PDF run
    pub progress_step_ms: u64,
    /// Percentage added per progress report
    pub progress_increment: u8,
}

impl Default for SimulationTimings {
    fn default() -> Self {
        Self {
            generation_delay_ms: 2000,
            progress_step_ms: 200,
            progress_increment: 10,
        }
    }
}

impl SimulationTimings {
    /// No delays at all; progress still reports every step.
    pub fn instant() -> Self {
        Self {
            generation_delay_ms: 0,
            progress_step_ms: 0,
            ..Self::default()
        }
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn progress_step(&self) -> Duration {
        Duration::from_millis(self.progress_step_ms)
    }

    /// Progress values reported during one run: 0, increment, ... 100.
    ///
    /// The last value is always exactly 100 even when the increment doesn't
    /// divide it.
    pub fn progress_steps(&self) -> Vec<u8> {
        let increment = self.progress_increment.clamp(1, 100) as usize;
        let mut steps: Vec<u8> = (0..=100).step_by(increment).map(|p| p as u8).collect();
        if steps.last() != Some(&100) {
            steps.push(100);
        }
        steps
    }

    /// Load timings from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let timings = serde_json::from_slice(&bytes)
            .map_err(|e| WizardError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(timings)
    }

    /// Save timings to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| WizardError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
