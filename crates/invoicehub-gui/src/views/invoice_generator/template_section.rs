use eframe::egui;
use invoicehub_wizard::{InvoiceWizard, TEMPLATES};

const CARD_SIZE: egui::Vec2 = egui::vec2(170.0, 90.0);

pub fn show(ui: &mut egui::Ui, wizard: &mut InvoiceWizard) {
    ui.strong("Choose from Templates");
    ui.weak("Select from our pre-designed invoice templates");
    ui.add_space(10.0);

    ui.horizontal_wrapped(|ui| {
        for template in &TEMPLATES {
            let selected = wizard.draft.selected_template() == Some(template.id);
            let mut text = format!("📄\n{}\n{}", template.name, template.format.name());
            if selected {
                text.insert_str(0, "✔ ");
            }

            let card = egui::Button::new(text)
                .selected(selected)
                .min_size(CARD_SIZE);
            if ui.add(card).clicked() {
                wizard.select_template(template.id);
            }
        }
    });

    ui.add_space(10.0);

    let has_template = wizard.draft.selected_template().is_some();
    if ui
        .add_enabled(
            has_template,
            egui::Button::new("Continue with Selected Template"),
        )
        .clicked()
    {
        wizard.forward();
    }
}
