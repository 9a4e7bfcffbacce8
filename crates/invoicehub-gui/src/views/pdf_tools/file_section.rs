use eframe::egui;
use invoicehub_wizard::{PdfFile, PdfWizard};
use tokio::sync::mpsc;

use super::state::PdfToolsState;
use crate::ui_components::{Notice, file_row};

pub fn show(ui: &mut egui::Ui, state: &mut PdfToolsState) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label("⬆");
                ui.strong("Drag & drop your PDF here");
                ui.weak("Only PDF files are supported");
                ui.add_space(6.0);
                show_picker_button(ui, &state.picked_tx);
            });
        });

    ui.add_space(10.0);

    let wizard = &mut state.wizard;
    if let Some(file) = wizard.task.file() {
        if file_row(ui, file, true) {
            wizard.remove_file();
        }
    }

    ui.add_space(10.0);

    let has_file = wizard.task.file().is_some();
    if ui
        .add_enabled(has_file, egui::Button::new("Continue"))
        .clicked()
    {
        wizard.forward();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_picker_button(ui: &mut egui::Ui, picked_tx: &mpsc::UnboundedSender<PdfFile>) {
    if ui.button("Select PDF").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        {
            match std::fs::metadata(&path) {
                Ok(metadata) => {
                    let _ = picked_tx.send(PdfFile::at_path(&path, metadata.len()));
                    ui.ctx().request_repaint();
                }
                Err(e) => log::error!("Failed to read {}: {}", path.display(), e),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn show_picker_button(ui: &mut egui::Ui, picked_tx: &mpsc::UnboundedSender<PdfFile>) {
    if ui.button("Select PDF").clicked() {
        let picked_tx = picked_tx.clone();
        let ctx = ui.ctx().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
                .await
            else {
                return;
            };
            let bytes = handle.read().await;
            // Browsers don't expose a MIME type here, so it is guessed from the name
            let file = PdfFile::new(handle.file_name(), bytes.len() as u64, "");
            let _ = picked_tx.send(file);
            ctx.request_repaint();
        });
    }
}

/// Select whatever the file dialog delivered since the last frame.
pub fn accept_picked_files(state: &mut PdfToolsState, notice: &mut Option<Notice>) {
    while let Ok(file) = state.picked_rx.try_recv() {
        select(&mut state.wizard, file, notice);
    }
}

/// Take the first file dropped onto the window this frame.
pub fn accept_dropped_files(ctx: &egui::Context, wizard: &mut PdfWizard, notice: &mut Option<Notice>) {
    let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
    if let Some(file) = dropped {
        select(wizard, dropped_file(&file), notice);
    }
}

fn dropped_file(file: &egui::DroppedFile) -> PdfFile {
    let size_from_path = || {
        file.path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
    };
    let size = file
        .bytes
        .as_ref()
        .map(|b| b.len() as u64)
        .or_else(size_from_path)
        .unwrap_or(0);

    match (&file.path, file.name.is_empty()) {
        (Some(path), true) => PdfFile::at_path(path, size),
        _ => {
            let mut pdf = PdfFile::new(file.name.clone(), size, file.mime.clone());
            pdf.path = file.path.clone();
            pdf
        }
    }
}

fn select(wizard: &mut PdfWizard, file: PdfFile, notice: &mut Option<Notice>) {
    if let Err(e) = wizard.select_file(file) {
        log::warn!("Rejected file: {e}");
        *notice = Some(Notice::new("Unsupported file", "Please upload a PDF file"));
    }
}
