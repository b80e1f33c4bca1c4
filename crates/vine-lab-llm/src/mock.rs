//! Mock backend for testing without a live AI service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{ExtractionBackend, GenerationRequest, ReportFile, UploadedFile};
use crate::extraction::{ExtractionError, ExtractionResult};

/// Canned generation result.
enum Reply {
    Text(String),
    Api { status: u16, body: String },
}

/// Backend returning a fixed model output and recording file traffic.
pub struct MockBackend {
    reply: Reply,
    fail_delete: bool,
    next_id: AtomicUsize,
    uploads: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Reply with the given model output text.
    pub fn with_output(output: impl Into<String>) -> Self {
        Self::new(Reply::Text(output.into()))
    }

    /// Reply with an HTTP error from the generation endpoint.
    pub fn with_api_error(status: u16, body: impl Into<String>) -> Self {
        Self::new(Reply::Api {
            status,
            body: body.into(),
        })
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            fail_delete: false,
            next_id: AtomicUsize::new(1),
            uploads: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Make every delete call fail.
    pub fn failing_deletes(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// File names uploaded so far.
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }

    /// File ids deleted (or attempted) so far.
    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().map(|d| d.clone()).unwrap_or_default()
    }

    /// User prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ExtractionBackend for MockBackend {
    async fn upload_file(&self, file: &ReportFile) -> ExtractionResult<UploadedFile> {
        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push(file.file_name.clone());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(UploadedFile {
            id: format!("file-mock-{id}"),
            mime_type: file.mime_type.clone(),
        })
    }

    async fn generate(
        &self,
        _file: &UploadedFile,
        request: &GenerationRequest,
    ) -> ExtractionResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.user_prompt.clone());
        }
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Api { status, body } => Err(ExtractionError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }

    async fn delete_file(&self, file: &UploadedFile) -> ExtractionResult<()> {
        if let Ok(mut deletes) = self.deletes.lock() {
            deletes.push(file.id.clone());
        }
        if self.fail_delete {
            return Err(ExtractionError::Api {
                status: 500,
                body: "delete failed".into(),
            });
        }
        Ok(())
    }
}
