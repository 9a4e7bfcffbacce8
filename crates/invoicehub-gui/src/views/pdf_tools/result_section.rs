use eframe::egui;
use invoicehub_wizard::PdfWizard;

use crate::ui_components::{Notice, file_row, success_banner};

pub fn show(ui: &mut egui::Ui, wizard: &mut PdfWizard, notice: &mut Option<Notice>) {
    if !wizard.task.is_done() {
        ui.label("Nothing processed yet.");
        return;
    }
    let operation = wizard.task.operation();

    if let Some(file) = wizard.task.file() {
        if file_row(ui, file, true) {
            wizard.remove_file();
            return;
        }
    }
    ui.add_space(6.0);

    success_banner(ui, operation.success_message(), |_| {});

    if let Some(removed) = wizard.task.removed_metadata() {
        ui.add_space(10.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("Removed Metadata:");
            egui::Grid::new("removed_metadata")
                .num_columns(2)
                .show(ui, |ui| {
                    for entry in removed {
                        ui.weak(format!("{}:", entry.label));
                        ui.label(entry.value);
                        ui.end_row();
                    }
                });
        });
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            wizard.back();
        }
        if ui
            .button(format!("⬇ {}", operation.download_label()))
            .clicked()
        {
            log::info!("Processed PDF download requested");
            *notice = Some(Notice::new("Download", wizard.download_notice()));
        }
    });
}
