use crate::file::PdfFile;
use crate::step::{StepController, StepGuard, WizardStep};
use crate::types::{Result, RunId, WizardError};

/// What to do with the selected PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PdfOperation {
    /// Flatten content and drop hidden layers
    #[default]
    Clean,
    /// Remove document metadata
    StripMetadata,
}

impl PdfOperation {
    pub const ALL: [PdfOperation; 2] = [PdfOperation::Clean, PdfOperation::StripMetadata];

    pub fn title(self) -> &'static str {
        match self {
            PdfOperation::Clean => "PDF Cleaner",
            PdfOperation::StripMetadata => "Metadata Remover",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PdfOperation::Clean => {
                "Convert your PDF to image and back to PDF to flatten all content and remove hidden layers."
            }
            PdfOperation::StripMetadata => {
                "Strip all metadata from your PDF files for enhanced privacy."
            }
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            PdfOperation::Clean => "Clean PDF",
            PdfOperation::StripMetadata => "Remove Metadata",
        }
    }

    pub fn progress_label(self) -> &'static str {
        match self {
            PdfOperation::Clean => "Processing...",
            PdfOperation::StripMetadata => "Removing metadata...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            PdfOperation::Clean => {
                "Your PDF has been cleaned successfully. All hidden layers have been removed."
            }
            PdfOperation::StripMetadata => "All metadata has been removed from your PDF file.",
        }
    }

    pub fn download_label(self) -> &'static str {
        match self {
            PdfOperation::Clean => "Download Cleaned PDF",
            PdfOperation::StripMetadata => "Download Clean PDF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Idle,
    Processing,
    Done,
}

/// One line of the "Removed Metadata" summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataEntry {
    pub label: &'static str,
    pub value: &'static str,
}

const REMOVED_METADATA: [MetadataEntry; 5] = [
    MetadataEntry {
        label: "Author",
        value: "John Doe",
    },
    MetadataEntry {
        label: "Created",
        value: "2023-05-15 14:32:45",
    },
    MetadataEntry {
        label: "Modified",
        value: "2023-05-18 09:15:22",
    },
    MetadataEntry {
        label: "Application",
        value: "Adobe Acrobat Pro DC",
    },
    MetadataEntry {
        label: "PDF Producer",
        value: "Adobe PDF Library 15.0",
    },
];

/// Session-scoped PDF tool state
#[derive(Debug, Clone, Default)]
pub struct PdfTask {
    file: Option<PdfFile>,
    operation: PdfOperation,
    progress: u8,
    status: TaskStatus,
    run: RunId,
}

impl PdfTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&PdfFile> {
        self.file.as_ref()
    }

    pub fn operation(&self) -> PdfOperation {
        self.operation
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_processing(&self) -> bool {
        self.status == TaskStatus::Processing
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Accept `file` if it is a PDF. On rejection nothing changes.
    ///
    /// A new file invalidates any run in flight and any previous result.
    pub fn select_file(&mut self, file: PdfFile) -> Result<()> {
        file.ensure_pdf()?;
        log::info!("Selected {} ({})", file.name, file.size_label());
        self.file = Some(file);
        self.reset_run();
        Ok(())
    }

    /// Drop the selected file and return to idle.
    pub fn remove_file(&mut self) {
        if let Some(file) = self.file.take() {
            log::info!("Removed {}", file.name);
        }
        self.reset_run();
    }

    fn reset_run(&mut self) {
        self.status = TaskStatus::Idle;
        self.progress = 0;
        self.run = RunId::fresh();
    }

    /// Start a run of `operation` on the selected file.
    pub fn begin_run(&mut self, operation: PdfOperation) -> Result<RunId> {
        if self.file.is_none() {
            return Err(WizardError::NoFileSelected);
        }
        if self.is_processing() {
            return Err(WizardError::AlreadyRunning);
        }
        self.run = RunId::fresh();
        self.operation = operation;
        self.status = TaskStatus::Processing;
        self.progress = 0;
        Ok(self.run)
    }

    /// Record a progress report. Stale runs and regressions are ignored.
    pub fn record_progress(&mut self, run: RunId, percent: u8) -> bool {
        if run != self.run || !self.is_processing() {
            return false;
        }
        let percent = percent.min(100);
        if percent < self.progress {
            log::warn!("Ignoring regressing progress {percent}% for run {run}");
            return false;
        }
        self.progress = percent;
        true
    }

    /// Mark `run` done. Returns false for a stale run.
    pub fn finish_run(&mut self, run: RunId) -> bool {
        if run != self.run || !self.is_processing() {
            log::debug!("Ignoring completion of stale run {run}");
            return false;
        }
        self.progress = 100;
        self.status = TaskStatus::Done;
        true
    }

    /// Abandon `run` and return to idle, keeping the file.
    pub fn cancel_run(&mut self, run: RunId) -> bool {
        if run != self.run || !self.is_processing() {
            return false;
        }
        log::debug!("Cancelled run {run}");
        self.reset_run();
        true
    }

    /// Canned list of removed fields, once a metadata strip has finished.
    pub fn removed_metadata(&self) -> Option<&'static [MetadataEntry]> {
        (self.is_done() && self.operation == PdfOperation::StripMetadata)
            .then_some(&REMOVED_METADATA[..])
    }
}

impl StepGuard for PdfTask {
    fn has_selection(&self) -> bool {
        self.file.is_some()
    }

    fn is_complete(&self) -> bool {
        self.is_done()
    }
}

/// File selection → operation → result
#[derive(Debug, Clone, Default)]
pub struct PdfWizard {
    pub task: PdfTask,
    steps: StepController,
}

impl PdfWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.steps.current()
    }

    pub fn can_enter(&self, step: WizardStep) -> bool {
        self.steps.can_enter(step, &self.task)
    }

    pub fn forward(&mut self) -> bool {
        self.steps.forward(&self.task)
    }

    pub fn back(&mut self) -> bool {
        self.steps.back()
    }

    pub fn go_to(&mut self, step: WizardStep) -> bool {
        self.steps.go_to(step, &self.task)
    }

    pub fn select_file(&mut self, file: PdfFile) -> Result<()> {
        self.task.select_file(file)?;
        if self.step() == WizardStep::Result {
            self.steps.back();
        }
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.task.remove_file();
        self.steps.reset();
    }

    pub fn begin_run(&mut self, operation: PdfOperation) -> Result<RunId> {
        let run = self.task.begin_run(operation)?;
        // Progress is shown on the action step
        match self.step() {
            WizardStep::Selection => self.steps.forward(&self.task),
            WizardStep::Input => true,
            WizardStep::Result => self.steps.back(),
        };
        Ok(run)
    }

    pub fn record_progress(&mut self, run: RunId, percent: u8) -> bool {
        self.task.record_progress(run, percent)
    }

    pub fn cancel_run(&mut self, run: RunId) -> bool {
        self.task.cancel_run(run)
    }

    /// Finish `run` and show the result summary.
    pub fn finish_run(&mut self, run: RunId) -> bool {
        if !self.task.finish_run(run) {
            return false;
        }
        self.steps.go_to(WizardStep::Result, &self.task);
        true
    }

    pub fn download_notice(&self) -> &'static str {
        "In a real app, this would download your processed PDF file."
    }
}
