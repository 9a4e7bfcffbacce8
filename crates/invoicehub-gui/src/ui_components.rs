use eframe::egui;
use invoicehub_wizard::{PdfFile, WizardStep};

/// A blocking message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Show `notice` as a modal until dismissed.
pub fn show_notice(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let response = egui::Modal::new(egui::Id::new("dashboard_notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(&current.title);
        ui.add_space(6.0);
        ui.label(&current.message);
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if response.inner || response.should_close() {
        *notice = None;
    }
}

/// Tab strip over the wizard steps. Returns the step the user clicked.
pub fn step_tabs(
    ui: &mut egui::Ui,
    current: WizardStep,
    labels: [&str; 3],
    can_enter: impl Fn(WizardStep) -> bool,
) -> Option<WizardStep> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (step, label) in WizardStep::ALL.into_iter().zip(labels) {
            let response = ui
                .add_enabled_ui(can_enter(step), |ui| {
                    ui.selectable_label(current == step, label)
                })
                .inner;
            if response.clicked() && step != current {
                clicked = Some(step);
            }
        }
    });
    clicked
}

/// Framed "Success!" box
pub fn success_banner(ui: &mut egui::Ui, message: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong("✔ Success!");
            ui.label(message);
            add_contents(ui);
        });
}

/// Builder for a labeled single-line text field
pub struct TextFieldBuilder<'a> {
    value: &'a mut String,
    label: &'a str,
    hint: Option<&'a str>,
    width: f32,
}

impl<'a> TextFieldBuilder<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self {
            value,
            label,
            hint: None,
            width: 240.0,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        ui.vertical(|ui| {
            ui.label(self.label);
            let mut edit = egui::TextEdit::singleline(self.value).desired_width(self.width);
            if let Some(hint) = self.hint {
                edit = edit.hint_text(hint);
            }
            ui.add(edit).changed()
        })
        .inner
    }
}

/// Selected file with its size and a remove button. Returns true on remove.
pub fn file_row(ui: &mut egui::Ui, file: &PdfFile, removable: bool) -> bool {
    let mut removed = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label("📄");
            ui.label(&file.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(removable, egui::Button::new("🗑"))
                    .on_hover_text("Remove file")
                    .clicked()
                {
                    removed = true;
                }
                ui.weak(file.size_label());
            });
        });
    });
    removed
}
