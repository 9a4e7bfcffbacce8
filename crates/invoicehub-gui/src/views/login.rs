use eframe::egui;

/// Landing page at `/`. Returns true when the user signs in.
pub fn show_login(ui: &mut egui::Ui) -> bool {
    let mut signed_in = false;
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.heading("Welcome to InvoiceHub");
        ui.add_space(8.0);
        ui.label("Generate invoices and clean up your PDF documents.");
        ui.add_space(24.0);
        if ui
            .add(egui::Button::new("Sign in").min_size(egui::vec2(160.0, 32.0)))
            .clicked()
        {
            signed_in = true;
        }
    });
    signed_in
}
