//! Report parser: upload → extraction → normalization.
//!
//! The uploaded file is removed from the AI service once generation has
//! finished, whether it succeeded or not. Removal runs in the background and
//! its failures are only logged.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::{info, warn};
use vine_lab_core::{Canonicalizer, ParameterPipeline, ParsedReport, TestType};

use crate::backend::{ExtractionBackend, GenerationRequest, ReportFile, UploadedFile};
use crate::extraction::{
    parse_extraction_output, to_parameter_entries, ExtractionOutput, ExtractionResult,
};
use crate::prompts::{extraction_schema, make_extraction_prompt, SCHEMA_NAME, SYSTEM_PROMPT};

/// Counts background deletions still running.
#[derive(Default)]
struct CleanupTracker {
    in_flight: AtomicUsize,
    idle: Notify,
}

impl CleanupTracker {
    fn start(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    fn finish(&self) {
        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    /// Count one deletion in; it is counted out when the guard drops.
    fn track(self: &Arc<Self>) -> CleanupGuard {
        self.start();
        CleanupGuard(Arc::clone(self))
    }

    async fn wait_idle(&self) {
        loop {
            // Registered before the check so a concurrent finish() is not missed.
            let notified = self.idle.notified();
            if self.in_flight.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Marks a tracked deletion finished even if its task panics.
struct CleanupGuard(Arc<CleanupTracker>);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.0.finish();
    }
}

/// Parses uploaded lab reports into canonical parameter sets.
pub struct ReportParser<B> {
    backend: Arc<B>,
    canonicalizer: Canonicalizer,
    cleanup: Arc<CleanupTracker>,
}

impl<B: ExtractionBackend + 'static> ReportParser<B> {
    /// Create a parser using the built-in alias table.
    pub fn new(backend: B) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Create a parser sharing an existing backend.
    pub fn from_arc(backend: Arc<B>) -> Self {
        Self {
            backend,
            canonicalizer: Canonicalizer::new(),
            cleanup: Arc::new(CleanupTracker::default()),
        }
    }

    /// Use a canonicalizer with extra lab-specific aliases.
    pub fn with_canonicalizer(mut self, canonicalizer: Canonicalizer) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract and normalize the parameters of one report.
    pub async fn parse_report(
        &self,
        file: &ReportFile,
        test_type: TestType,
    ) -> ExtractionResult<ParsedReport> {
        let uploaded = self.backend.upload_file(file).await?;
        let extracted = self.extract(&uploaded, test_type).await;
        self.spawn_cleanup(uploaded);
        let output = extracted?;

        let entries = to_parameter_entries(&output);
        let parameters =
            ParameterPipeline::new(&self.canonicalizer, test_type).normalize_all(&entries);

        if parameters.is_empty() {
            warn!(file_name = %file.file_name, %test_type, "no numeric parameters extracted");
        }
        info!(
            file_name = %file.file_name,
            %test_type,
            extracted = output.parameters.len(),
            kept = parameters.len(),
            "parsed lab report"
        );

        Ok(ParsedReport::new(
            parameters,
            output.summary,
            output.notes,
            output.confidence,
            output.test_date,
        ))
    }

    async fn extract(
        &self,
        uploaded: &UploadedFile,
        test_type: TestType,
    ) -> ExtractionResult<ExtractionOutput> {
        let request = GenerationRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: make_extraction_prompt(test_type),
            schema_name: SCHEMA_NAME.to_string(),
            schema: extraction_schema(),
        };
        let text = self.backend.generate(uploaded, &request).await?;
        parse_extraction_output(&text)
    }

    /// Wait until background deletions of uploaded files have finished.
    ///
    /// Short-lived callers (CLIs) use this before the runtime shuts down.
    pub async fn wait_for_cleanup(&self) {
        self.cleanup.wait_idle().await;
    }

    /// Delete the uploaded file without holding up the caller.
    fn spawn_cleanup(&self, uploaded: UploadedFile) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(file_id = %uploaded.id, "no tokio runtime, uploaded file left in place");
            return;
        };

        let backend = Arc::clone(&self.backend);
        let guard = self.cleanup.track();
        handle.spawn(async move {
            let _guard = guard;
            if let Err(e) = backend.delete_file(&uploaded).await {
                warn!(file_id = %uploaded.id, error = %e, "failed to delete uploaded report");
            }
        });
    }
}
