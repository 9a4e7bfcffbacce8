pub mod invoice_generator;
pub mod layout;
pub mod login;
pub mod pdf_tools;

pub use invoice_generator::show_invoice_generator;
pub use layout::{NavAction, show_log_panel, show_nav_bar};
pub use login::show_login;
pub use pdf_tools::{PdfToolsState, show_pdf_tools};
