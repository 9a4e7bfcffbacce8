mod action_section;
mod file_section;
mod result_section;
mod state;

pub use state::PdfToolsState;

use eframe::egui;
use invoicehub_async_runtime::DashboardCommand;
use invoicehub_wizard::{PdfOperation, WizardStep};
use tokio::sync::mpsc;

use crate::ui_components::{Notice, step_tabs};

const STEP_LABELS: [&str; 3] = ["Select PDF", "Process", "Result"];

pub fn show_pdf_tools(
    ui: &mut egui::Ui,
    state: &mut PdfToolsState,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    ui.heading("PDF Tools");
    ui.label("Clean your PDFs and remove metadata for enhanced privacy and security.");
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        for operation in PdfOperation::ALL {
            ui.selectable_value(&mut state.operation, operation, operation.title());
        }
    });
    ui.separator();

    if let Some(step) = step_tabs(ui, state.wizard.step(), STEP_LABELS, |step| {
        state.wizard.can_enter(step)
    }) {
        state.wizard.go_to(step);
    }
    ui.add_space(6.0);

    file_section::accept_dropped_files(ui.ctx(), &mut state.wizard, notice);
    file_section::accept_picked_files(state, notice);

    egui::ScrollArea::vertical().show(ui, |ui| match state.wizard.step() {
        WizardStep::Selection => file_section::show(ui, state),
        WizardStep::Input => action_section::show(ui, state, command_tx, notice),
        WizardStep::Result => result_section::show(ui, &mut state.wizard, notice),
    });
}
