//! OpenAI-compatible backend.
//!
//! Uses the Files API for report uploads and the Responses API with a
//! strict `json_schema` text format for extraction.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::backend::{ExtractionBackend, GenerationRequest, ReportFile, UploadedFile};
use crate::config::LlmConfig;
use crate::extraction::{ExtractionError, ExtractionResult};

/// Purpose tag for files used as model inputs.
const FILE_PURPOSE: &str = "user_data";

/// Client for an OpenAI-compatible API.
#[derive(Clone)]
pub struct OpenAiBackend {
    config: LlmConfig,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct FileObject {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    output: Vec<OutputItem>,
    /// Convenience field some compatible servers return
    #[serde(default)]
    output_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiBackend {
    /// Create a backend with the client's default settings.
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Create a backend from environment configuration.
    pub fn from_env() -> ExtractionResult<Self> {
        Ok(Self::new(LlmConfig::from_env()?))
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Build the Responses API request body.
    fn responses_body(&self, file: &UploadedFile, request: &GenerationRequest) -> serde_json::Value {
        let attachment = if file.is_image() {
            json!({ "type": "input_image", "file_id": file.id })
        } else {
            json!({ "type": "input_file", "file_id": file.id })
        };

        json!({
            "model": self.config.model,
            "input": [
                { "role": "system", "content": request.system_prompt },
                {
                    "role": "user",
                    "content": [
                        attachment,
                        { "type": "input_text", "text": request.user_prompt }
                    ]
                }
            ],
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": request.schema_name,
                    "schema": request.schema,
                    "strict": true
                }
            }
        })
    }
}

/// Turn non-2xx responses into API errors carrying the body.
async fn check_status(response: Response) -> ExtractionResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ExtractionError::Api {
        status: status.as_u16(),
        body,
    })
}

/// Collect the output text from a Responses API envelope.
fn output_text(envelope: ResponsesEnvelope) -> ExtractionResult<String> {
    let mut text = String::new();
    for item in envelope.output.iter().filter(|i| i.kind == "message") {
        for part in &item.content {
            match part.kind.as_str() {
                "output_text" => text.push_str(part.text.as_deref().unwrap_or_default()),
                "refusal" => {
                    return Err(ExtractionError::InvalidFormat(format!(
                        "Model refused: {}",
                        part.refusal.as_deref().unwrap_or("no reason given")
                    )))
                }
                _ => {}
            }
        }
    }

    if text.trim().is_empty() {
        text = envelope.output_text.unwrap_or_default();
    }
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl ExtractionBackend for OpenAiBackend {
    async fn upload_file(&self, file: &ReportFile) -> ExtractionResult<UploadedFile> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        let form = multipart::Form::new()
            .text("purpose", FILE_PURPOSE)
            .part("file", part);

        let response = self
            .http_client
            .post(self.url("files"))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await?;
        let uploaded: FileObject = check_status(response).await?.json().await?;

        debug!(file_id = %uploaded.id, file_name = %file.file_name, "uploaded report");
        Ok(UploadedFile {
            id: uploaded.id,
            mime_type: file.mime_type.clone(),
        })
    }

    async fn generate(
        &self,
        file: &UploadedFile,
        request: &GenerationRequest,
    ) -> ExtractionResult<String> {
        let response = self
            .http_client
            .post(self.url("responses"))
            .bearer_auth(&self.config.api_key)
            .json(&self.responses_body(file, request))
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;

        let envelope: ResponsesEnvelope =
            serde_json::from_str(&body).map_err(|source| ExtractionError::JsonParse {
                context: "responses envelope".into(),
                source,
            })?;
        output_text(envelope)
    }

    async fn delete_file(&self, file: &UploadedFile) -> ExtractionResult<()> {
        let response = self
            .http_client
            .delete(self.url(&format!("files/{}", file.id)))
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
