#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use chrono::SecondsFormat;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

use super::GenerationRequest;

const CONSTRAINTS_PREVIEW_LENGTH: usize = 100;

/// One past generation. Entries are never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSpecification {
    pub id: String,
    pub timestamp: String,
    pub goal: String,
    pub users: String,
    pub constraints: String,
    pub template: String,
    pub risks: String,
    pub result: String,
}

impl GeneratedSpecification {
    pub fn new(request: &GenerationRequest, result: &str) -> GeneratedSpecification {
        return GeneratedSpecification::new_at(request, result, Utc::now());
    }

    pub fn new_at(
        request: &GenerationRequest,
        result: &str,
        created_at: DateTime<Utc>,
    ) -> GeneratedSpecification {
        return GeneratedSpecification {
            id: create_id(),
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            goal: request.goal.to_string(),
            users: request.users.to_string(),
            constraints: request.constraints.to_string(),
            template: request.template.to_string(),
            risks: request.risks.to_string(),
            result: result.to_string(),
        };
    }

    pub fn request(&self) -> GenerationRequest {
        return GenerationRequest {
            goal: self.goal.to_string(),
            users: self.users.to_string(),
            constraints: self.constraints.to_string(),
            template: self.template.to_string(),
            risks: self.risks.to_string(),
        };
    }

    pub fn display_timestamp(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return parsed
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
        }

        return self.timestamp.to_string();
    }

    pub fn constraints_preview(&self) -> String {
        if self.constraints.chars().count() <= CONSTRAINTS_PREVIEW_LENGTH {
            return self.constraints.to_string();
        }

        let head = self
            .constraints
            .chars()
            .take(CONSTRAINTS_PREVIEW_LENGTH)
            .collect::<String>();
        return format!("{head}...");
    }
}

fn create_id() -> String {
    return Uuid::new_v4()
        .to_string()
        .split('-')
        .take(2)
        .collect::<Vec<&str>>()
        .join("-");
}
