use invoicehub_wizard::{PdfFile, PdfOperation, PdfWizard};
use tokio::sync::mpsc;

pub struct PdfToolsState {
    pub wizard: PdfWizard,
    /// Operation tab the next run will use
    pub operation: PdfOperation,
    /// Files chosen in the file dialog, delivered to the next frame
    pub picked_tx: mpsc::UnboundedSender<PdfFile>,
    pub picked_rx: mpsc::UnboundedReceiver<PdfFile>,
}

impl Default for PdfToolsState {
    fn default() -> Self {
        let (picked_tx, picked_rx) = mpsc::unbounded_channel();
        Self {
            wizard: PdfWizard::default(),
            operation: PdfOperation::default(),
            picked_tx,
            picked_rx,
        }
    }
}
