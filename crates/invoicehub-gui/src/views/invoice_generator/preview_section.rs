use eframe::egui;
use invoicehub_wizard::InvoiceWizard;

use crate::ui_components::Notice;

pub fn show(ui: &mut egui::Ui, wizard: &mut InvoiceWizard, notice: &mut Option<Notice>) {
    ui.strong("Invoice Preview");
    ui.weak("Preview and download your generated invoice");
    ui.add_space(10.0);

    let Some(preview) = wizard.draft.preview() else {
        ui.label("Generate the invoice to see a preview.");
        return;
    };

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(640.0));

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(&preview.company_name);
                    ui.weak(&preview.company_address);
                });
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.heading("INVOICE");
                    ui.weak(&preview.serial_number);
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong("Bill To:");
                    ui.label(&preview.customer_name);
                    ui.weak(&preview.customer_address);
                });
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    egui::Grid::new("invoice_meta").show(ui, |ui| {
                        ui.strong("Invoice Date:");
                        ui.label(&preview.invoice_date);
                        ui.end_row();
                        ui.strong("Order Number:");
                        ui.label(&preview.order_number);
                        ui.end_row();
                    });
                });
            });
            ui.separator();

            egui::Grid::new("invoice_lines")
                .num_columns(2)
                .min_col_width(200.0)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Description");
                    ui.strong("Amount");
                    ui.end_row();
                    ui.label(&preview.description);
                    ui.label(&preview.amount);
                    ui.end_row();
                    ui.strong("Total");
                    ui.strong(&preview.total);
                    ui.end_row();
                });
            ui.add_space(8.0);

            for line in preview.footer {
                ui.weak(line);
            }
        });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("Back to Edit").clicked() {
            wizard.back();
        }
        if ui.button("⬇ Download PDF").clicked() {
            log::info!("Invoice download requested");
            *notice = Some(Notice::new("Download", wizard.download_notice()));
        }
    });
}
