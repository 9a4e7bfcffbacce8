mod details_section;
mod preview_section;
mod template_section;

use eframe::egui;
use invoicehub_async_runtime::DashboardCommand;
use invoicehub_wizard::{InvoiceWizard, WizardStep};
use tokio::sync::mpsc;

use crate::ui_components::{Notice, step_tabs, success_banner};

const STEP_LABELS: [&str; 3] = ["Select Template", "Fill Details", "Preview & Download"];

pub fn show_invoice_generator(
    ui: &mut egui::Ui,
    wizard: &mut InvoiceWizard,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    ui.heading("Invoice Generator");
    ui.label("Create professional invoices by selecting a template and filling in your details.");
    ui.add_space(10.0);

    if let Some(step) = step_tabs(ui, wizard.step(), STEP_LABELS, |step| {
        wizard.can_enter(step)
    }) {
        wizard.go_to(step);
    }
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        match wizard.step() {
            WizardStep::Selection => template_section::show(ui, wizard),
            WizardStep::Input => details_section::show(ui, wizard, command_tx, notice),
            WizardStep::Result => preview_section::show(ui, wizard, notice),
        }

        if wizard.shows_success_notice() {
            ui.add_space(10.0);
            success_banner(
                ui,
                "Your invoice has been generated successfully. You can now preview and download it.",
                |ui| {
                    if ui.button("Preview Invoice").clicked() {
                        wizard.forward();
                    }
                },
            );
        }
    });
}
