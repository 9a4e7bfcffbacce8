use eframe::egui;
use invoicehub_async_runtime::DashboardCommand;
use tokio::sync::mpsc;

use super::state::PdfToolsState;
use crate::ui_components::{Notice, file_row};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut PdfToolsState,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    let operation = state.operation;
    ui.strong(operation.title());
    ui.weak(operation.description());
    ui.add_space(10.0);

    let processing = state.wizard.task.is_processing();

    if let Some(file) = state.wizard.task.file() {
        if file_row(ui, file, true) {
            state.wizard.remove_file();
            return;
        }
    }

    if processing {
        let task = &state.wizard.task;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(task.operation().progress_label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", task.progress()));
            });
        });
        ui.add(egui::ProgressBar::new(task.progress() as f32 / 100.0));
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!processing, egui::Button::new("Back"))
            .clicked()
        {
            state.wizard.back();
        }

        let label = if processing {
            "Processing..."
        } else {
            operation.action_label()
        };
        let can_run = state.wizard.task.file().is_some() && !processing;
        if ui
            .add_enabled(can_run, egui::Button::new(label))
            .clicked()
        {
            start_run(state, command_tx, notice);
        }
    });
}

fn start_run(
    state: &mut PdfToolsState,
    command_tx: &mpsc::UnboundedSender<DashboardCommand>,
    notice: &mut Option<Notice>,
) {
    let operation = state.operation;
    let Some(file) = state.wizard.task.file().cloned() else {
        return;
    };
    let run = match state.wizard.begin_run(operation) {
        Ok(run) => run,
        Err(e) => {
            log::warn!("Cannot start {}: {e}", operation.title());
            return;
        }
    };

    let command = DashboardCommand::PdfProcess {
        run,
        file,
        operation,
    };
    if command_tx.send(command).is_err() {
        log::error!("Worker is gone, {} not started", operation.title());
        state.wizard.cancel_run(run);
        *notice = Some(Notice::new(
            "Processing failed",
            "The PDF could not be processed. Please try again.",
        ));
    }
}
