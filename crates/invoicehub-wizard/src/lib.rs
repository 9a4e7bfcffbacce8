mod file;
mod invoice;
mod pdf_task;
mod route;
mod session;
mod step;
mod template;
mod timings;
mod types;

pub use file::{PDF_MIME, PdfFile};
pub use invoice::{InvoiceDraft, InvoiceField, InvoiceFields, InvoicePreview, InvoiceStatus, InvoiceWizard};
pub use pdf_task::{MetadataEntry, PdfOperation, PdfTask, PdfWizard, TaskStatus};
pub use route::Route;
pub use session::{GateDecision, MemoryStore, SESSION_KEY, SESSION_MARKER, SessionGate, SessionStore};
#[cfg(feature = "serde")]
pub use session::FileStore;
pub use step::{StepController, StepGuard, WizardStep};
pub use template::{TEMPLATES, Template, TemplateFormat, TemplateId};
pub use timings::SimulationTimings;
pub use types::*;
