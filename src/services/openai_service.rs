use crate::models::chat::{ChatRequest, ChatResponse};
use log::info;
use reqwest::blocking::Client;
use reqwest::header;
use std::error::Error;

pub struct OpenAIService {
    client: Client,
    url: String,
    api_key: String,
}

impl OpenAIService {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            api_key,
        }
    }

    /// One blocking POST to the chat-completions endpoint. Returns the raw
    /// response body; the envelope is parsed separately by
    /// [`extract_content`].
    pub fn chat(
        &self,
        model: &str,
        prompt: &str,
        temperature: f64,
    ) -> Result<String, Box<dyn Error>> {
        let request_body = ChatRequest::user(model, prompt, temperature);

        info!("Calling OpenAI API...");
        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        if !status.is_success() {
            return Err(format!("OpenAI API returned {}: {}", status, body).into());
        }

        Ok(body)
    }
}

/// First choice's message content from the response envelope. Zero choices
/// or empty content is an application-level error, distinct from transport
/// failures.
pub fn extract_content(body: &str) -> Result<String, Box<dyn Error>> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {}", e))?;

    match response.choices.into_iter().next() {
        Some(choice) if !choice.message.content.is_empty() => Ok(choice.message.content),
        _ => Err("no content found in the response".into()),
    }
}
