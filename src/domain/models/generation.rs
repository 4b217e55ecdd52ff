#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Product type selected in the form. Requests carry the raw string so
/// entries restored from history keep whatever value they were created with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Template {
    #[default]
    Web,
    Mobile,
    Internal,
}

impl Template {
    pub fn parse(text: &str) -> Option<Template> {
        return Template::iter().find(|e| return e.to_string() == text);
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::Web => return "Web Application",
            Template::Mobile => return "Mobile App",
            Template::Internal => return "Internal Tool",
        }
    }

    pub fn next(&self) -> Template {
        let all = Template::iter().collect::<Vec<Template>>();
        let idx = all.iter().position(|e| return e == self).unwrap_or(0);
        return all[(idx + 1) % all.len()];
    }

    pub fn prev(&self) -> Template {
        let all = Template::iter().collect::<Vec<Template>>();
        let idx = all.iter().position(|e| return e == self).unwrap_or(0);
        return all[(idx + all.len() - 1) % all.len()];
    }
}

/// The five fields describing a feature to be turned into tasks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub goal: String,
    pub users: String,
    pub constraints: String,
    pub template: String,
    pub risks: String,
}

impl Default for GenerationRequest {
    fn default() -> GenerationRequest {
        return GenerationRequest {
            goal: "".to_string(),
            users: "".to_string(),
            constraints: "".to_string(),
            template: Template::default().to_string(),
            risks: "".to_string(),
        };
    }
}

impl GenerationRequest {
    pub fn template_label(&self) -> String {
        if let Some(template) = Template::parse(&self.template) {
            return template.label().to_string();
        }

        return self.template.to_string();
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub result: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[async_trait]
pub trait Generator {
    /// Submits a request to the generation service and returns its payload.
    /// Failures carry a message suitable for showing to the user as is.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

pub type GeneratorBox = std::sync::Arc<dyn Generator + Send + Sync>;
