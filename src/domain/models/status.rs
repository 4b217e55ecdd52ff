#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::style::Color;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub backend: String,
    pub database: String,
    pub llm: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthLevel {
    Healthy,
    Warning,
    Error,
}

impl HealthLevel {
    pub fn classify(value: &str) -> HealthLevel {
        match value {
            "healthy" => return HealthLevel::Healthy,
            "not_configured" => return HealthLevel::Warning,
            _ => return HealthLevel::Error,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            HealthLevel::Healthy => return Color::Green,
            HealthLevel::Warning => return Color::Yellow,
            HealthLevel::Error => return Color::Red,
        }
    }
}

/// A single row of the health snapshot along with how it should be
/// presented.
pub struct StatusRow<'a> {
    pub title: &'static str,
    pub caption: &'static str,
    pub value: &'a str,
    pub level: HealthLevel,
}

impl StatusSnapshot {
    pub fn rows(&self) -> Vec<StatusRow<'_>> {
        return vec![
            StatusRow {
                title: "Backend API",
                caption: "Generation server status",
                value: &self.backend,
                level: HealthLevel::classify(&self.backend),
            },
            StatusRow {
                title: "Database",
                caption: "History is stored locally by this client",
                value: &self.database,
                level: HealthLevel::classify(&self.database),
            },
            StatusRow {
                title: "LLM Connection",
                caption: "Model provider behind the generation server",
                value: &self.llm,
                level: HealthLevel::classify(&self.llm),
            },
        ];
    }
}

#[async_trait]
pub trait StatusProbe {
    /// Fetches the current health snapshot from the status endpoint.
    async fn check(&self) -> Result<StatusSnapshot>;
}

pub type StatusProbeBox = std::sync::Arc<dyn StatusProbe + Send + Sync>;
