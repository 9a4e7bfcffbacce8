use eframe::egui;
use invoicehub_wizard::Route;

use crate::logger::AppLogger;

/// What the user asked the dashboard shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Navigate(Route),
    ToggleTheme,
    Logout,
}

fn nav_label(route: Route) -> String {
    let icon = match route {
        Route::Dashboard | Route::Root => "🏠",
        Route::InvoiceGenerator => "🧾",
        Route::PdfTools => "📄",
    };
    format!("{icon} {}", route.title())
}

pub fn show_nav_bar(ctx: &egui::Context, current: Route) -> Option<NavAction> {
    let mut action = None;

    egui::TopBottomPanel::top("dashboard_nav").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.strong("🧾 InvoiceHub");
            ui.separator();

            for route in Route::NAVIGATION {
                if ui.selectable_label(route == current, nav_label(route)).clicked() {
                    action = Some(NavAction::Navigate(route));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⎋ Logout").clicked() {
                    action = Some(NavAction::Logout);
                }

                let icon = if ui.visuals().dark_mode { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    action = Some(NavAction::ToggleTheme);
                }
            });
        });
        ui.add_space(4.0);
    });

    action
}

pub fn show_log_panel(ctx: &egui::Context, logger: &AppLogger, expanded: &mut bool) {
    egui::TopBottomPanel::bottom("dashboard_log").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.toggle_value(expanded, "📜 Log");
            if let Some(message) = logger.latest_message() {
                ui.weak(message);
            }
        });

        if *expanded {
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(160.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.get_entries() {
                        ui.horizontal(|ui| {
                            ui.monospace(entry.timestamp.format("%H:%M:%S").to_string());
                            ui.monospace(format!("{:<5}", entry.level));
                            ui.label(&entry.message);
                        })
                        .response
                        .on_hover_text(&entry.target);
                    }
                });
            if ui.small_button("Clear").clicked() {
                logger.clear();
            }
        }
    });
}
