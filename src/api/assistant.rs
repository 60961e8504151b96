use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{api::client, prelude::*};

const MODEL_ID: &str = "gemini-2.5-flash";

/// Stateless pass-through to the generative-text endpoint: prompt in, text out.
pub struct Assistant {
    client: Client,
    api_key: String,
}

impl Assistant {
    pub fn try_new(api_key: String) -> Result<Self> {
        ensure!(
            !api_key.trim().is_empty(),
            "the assistant is not configured, set `GENERATIVE_AI_API_KEY`",
        );
        Ok(Self { client: client::try_new()?, api_key })
    }

    #[instrument(skip_all)]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        ensure!(!prompt.trim().is_empty(), "the prompt must not be empty");

        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
            generation_config: GenerationConfig::default(),
        };
        let response: GenerateResponse = self
            .client
            .post(format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{MODEL_ID}:generateContent?key={}",
                self.api_key,
            ))
            .json(&request)
            .send()
            .await
            .context("failed to call the assistant endpoint")?
            .error_for_status()
            .context("the assistant could not process this request")?
            .json()
            .await
            .context("failed to deserialize the assistant response")?;
        debug!(n_candidates = response.candidates.len(), "done");
        Ok(extract_text(&response))
    }
}

/// First candidate's parts joined by blank lines, trimmed.
fn extract_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,

    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 0.6, top_k: 40, top_p: 0.8, max_output_tokens: 512 }
    }
}

#[derive(Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Default, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}
