use eframe::egui;
use invoicehub_async_runtime::DashboardCommand;
use invoicehub_wizard::{InvoiceField, InvoiceWizard};
use tokio::sync::mpsc;

use crate::ui_components::{Notice, TextFieldBuilder};

// Laid out two per row, description gets a row of its own
const FIELD_ROWS: [&[InvoiceField]; 4] = [
    &[InvoiceField::CustomerName, InvoiceField::CompanyName],
    &[InvoiceField::Price, InvoiceField::OrderNumber],
    &[InvoiceField::InvoiceDate, InvoiceField::SerialNumber],
    &[InvoiceField::Description],
];

pub fn show(
    ui: &mut egui::Ui,
    wizard: &mut InvoiceWizard,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    ui.strong("Invoice Details");
    match wizard.draft.template() {
        Some(template) => ui.weak(format!(
            "Fill in the details for your invoice using {}",
            template.name
        )),
        None => ui.weak("Fill in the details for your invoice"),
    };
    ui.add_space(10.0);

    let generating = wizard.draft.is_generating();
    ui.add_enabled_ui(!generating, |ui| {
        for row in FIELD_ROWS {
            ui.horizontal(|ui| {
                let width = if row.len() == 1 { 496.0 } else { 240.0 };
                for &field in row {
                    TextFieldBuilder::new(field.label(), wizard.draft.fields.get_mut(field))
                        .hint(field.hint())
                        .width(width)
                        .show(ui);
                }
            });
            ui.add_space(6.0);
        }
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            wizard.back();
        }

        let label = if generating {
            "Generating..."
        } else {
            "Generate Invoice"
        };
        if ui
            .add_enabled(!generating, egui::Button::new(label))
            .clicked()
        {
            generate(wizard, command_tx, notice);
        }
        if generating {
            ui.spinner();
        }
    });
}

fn generate(
    wizard: &mut InvoiceWizard,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    let Some(template) = wizard.draft.selected_template() else {
        return;
    };
    let run = match wizard.begin_generation() {
        Ok(run) => run,
        Err(e) => {
            log::warn!("Cannot generate invoice: {e}");
            return;
        }
    };

    log::info!("Generating invoice with {}", template.template().name);
    let command = DashboardCommand::InvoiceGenerate {
        run,
        template,
        fields: wizard.draft.fields.clone(),
    };
    if command_tx.send(command).is_err() {
        log::error!("Worker is gone, invoice generation not started");
        wizard.cancel_generation(run);
        *notice = Some(Notice::new(
            "Generation failed",
            "The invoice could not be generated. Please try again.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicehub_wizard::{InvoiceStatus, TemplateId};

    fn ready_wizard() -> InvoiceWizard {
        let mut wizard = InvoiceWizard::new();
        wizard.select_template(TemplateId::Professional);
        wizard.forward();
        wizard
    }

    #[test]
    fn test_generate_sends_command() {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        let mut wizard = ready_wizard();
        let mut notice = None;

        generate(&mut wizard, &command_tx, &mut notice);

        assert!(wizard.draft.is_generating());
        assert!(notice.is_none());
        assert!(matches!(
            command_rx.try_recv(),
            Ok(DashboardCommand::InvoiceGenerate {
                template: TemplateId::Professional,
                ..
            })
        ));
    }

    #[test]
    fn test_generate_without_worker_resets_draft() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        drop(command_rx);
        let mut wizard = ready_wizard();
        let mut notice = None;

        generate(&mut wizard, &command_tx, &mut notice);

        assert_eq!(wizard.draft.status(), InvoiceStatus::Editing);
        assert!(notice.is_some());

        // The button works again once a worker is listening
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        generate(&mut wizard, &command_tx, &mut notice);
        assert!(wizard.draft.is_generating());
        assert!(command_rx.try_recv().is_ok());
    }
}
