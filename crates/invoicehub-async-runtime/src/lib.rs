mod worker;

pub use worker::worker_task;

// Re-export types from the wizard crate
pub use invoicehub_wizard::{
    InvoiceFields, PdfFile, PdfOperation, RunId, SimulationTimings, TemplateId,
};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum DashboardCommand {
    InvoiceGenerate {
        run: RunId,
        template: TemplateId,
        fields: InvoiceFields,
    },
    PdfProcess {
        run: RunId,
        file: PdfFile,
        operation: PdfOperation,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardUpdate {
    InvoiceGenerated {
        run: RunId,
        template: TemplateId,
    },
    PdfProgress {
        run: RunId,
        operation: PdfOperation,
        percent: u8,
    },
    PdfProcessed {
        run: RunId,
        operation: PdfOperation,
        file_name: String,
    },
}
