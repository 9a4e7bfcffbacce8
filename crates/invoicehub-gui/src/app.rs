use eframe::egui;
use invoicehub_async_runtime::{DashboardCommand, DashboardUpdate};
use invoicehub_wizard::{
    GateDecision, InvoiceWizard, MemoryStore, Route, SESSION_KEY, SessionGate, SessionStore,
    SimulationTimings,
};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::ui_components::{Notice, show_notice};
use crate::views::{
    NavAction, PdfToolsState, show_invoice_generator, show_log_panel, show_login, show_nav_bar,
    show_pdf_tools,
};

pub struct DashboardApp {
    route: Route,
    /// Working copy of the session flag, written back in `save`
    session: MemoryStore,
    theme: egui::ThemePreference,
    invoice: InvoiceWizard,
    pdf_tools: PdfToolsState,
    notice: Option<Notice>,
    logger: AppLogger,
    show_log: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<DashboardCommand>,
    update_rx: mpsc::UnboundedReceiver<DashboardUpdate>,

    // Runtime handle (native only)
    #[cfg(not(target_arch = "wasm32"))]
    _tokio_handle: tokio::runtime::Handle,
}

impl DashboardApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: AppLogger,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(invoicehub_async_runtime::worker_task(
            SimulationTimings::default(),
            command_rx,
            update_tx,
        ));

        let (session, route) = restore_session(cc);
        Self {
            route,
            session,
            theme: egui::ThemePreference::System,
            invoice: InvoiceWizard::new(),
            pdf_tools: PdfToolsState::default(),
            notice: None,
            logger,
            show_log: false,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task using wasm-bindgen-futures
        wasm_bindgen_futures::spawn_local(invoicehub_async_runtime::worker_task(
            SimulationTimings::default(),
            command_rx,
            update_tx,
        ));

        let (session, route) = restore_session(cc);
        Self {
            route,
            session,
            theme: egui::ThemePreference::System,
            invoice: InvoiceWizard::new(),
            pdf_tools: PdfToolsState::default(),
            notice: None,
            logger,
            show_log: false,
            command_tx,
            update_rx,
        }
    }

    /// Navigate through the session gate.
    fn navigate(&mut self, route: Route) {
        let target = match SessionGate::check(&self.session, route) {
            GateDecision::Render(route) => route,
            GateDecision::Redirect(target) => target,
        };
        self.enter(target);
    }

    /// Switch pages. Wizard state lives only while its page is shown.
    fn enter(&mut self, target: Route) {
        let target = target.resolve(SessionGate::is_signed_in(&self.session));
        if target == self.route {
            return;
        }
        match self.route {
            Route::InvoiceGenerator | Route::Dashboard => self.invoice = InvoiceWizard::new(),
            Route::PdfTools => self.pdf_tools = PdfToolsState::default(),
            Route::Root => {}
        }
        log::debug!("Navigating {} -> {}", self.route, target);
        self.route = target;
    }

    fn handle_nav(&mut self, ctx: &egui::Context, action: NavAction) {
        match action {
            NavAction::Navigate(route) => self.navigate(route),
            NavAction::ToggleTheme => {
                self.theme = match ctx.theme() {
                    egui::Theme::Dark => egui::ThemePreference::Light,
                    egui::Theme::Light => egui::ThemePreference::Dark,
                };
            }
            NavAction::Logout => {
                let target = SessionGate::logout(&mut self.session);
                self.enter(target);
            }
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                DashboardUpdate::InvoiceGenerated { run, template } => {
                    if self.invoice.complete_generation(run) {
                        log::info!("{} ready for preview", template.template().name);
                    }
                }
                DashboardUpdate::PdfProgress { run, percent, .. } => {
                    self.pdf_tools.wizard.record_progress(run, percent);
                }
                DashboardUpdate::PdfProcessed {
                    run,
                    operation,
                    file_name,
                } => {
                    if self.pdf_tools.wizard.finish_run(run) {
                        log::info!("{}: {} done", operation.title(), file_name);
                    }
                }
            }
            ctx.request_repaint();
        }
    }

    fn has_work_in_flight(&self) -> bool {
        self.invoice.draft.is_generating() || self.pdf_tools.wizard.task.is_processing()
    }
}

/// Read the session flag from eframe storage and pick the landing route.
fn restore_session(cc: &eframe::CreationContext<'_>) -> (MemoryStore, Route) {
    let mut session = MemoryStore::new();
    if let Some(flag) = cc.storage.and_then(|s| s.get_string(SESSION_KEY)) {
        session.set(SESSION_KEY, &flag);
    }

    let route = match SessionGate::check(&session, Route::Dashboard) {
        GateDecision::Render(route) | GateDecision::Redirect(route) => route,
    };
    log::info!("Starting at {route}");
    (session, route)
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_theme(self.theme);

        // Process all pending updates from worker
        self.process_updates(ctx);

        // Logging out elsewhere (or a cleared flag) closes the dashboard
        if let GateDecision::Redirect(target) = SessionGate::check(&self.session, self.route) {
            self.enter(target);
        }

        if self.route == Route::Root {
            egui::CentralPanel::default().show(ctx, |ui| {
                if show_login(ui) {
                    let target = SessionGate::login(&mut self.session);
                    self.enter(target);
                }
            });
            return;
        }

        if let Some(action) = show_nav_bar(ctx, self.route) {
            self.handle_nav(ctx, action);
        }
        show_log_panel(ctx, &self.logger, &mut self.show_log);

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::PdfTools => show_pdf_tools(
                ui,
                &mut self.pdf_tools,
                &self.command_tx,
                &mut self.notice,
            ),
            _ => show_invoice_generator(ui, &mut self.invoice, &self.command_tx, &mut self.notice),
        });

        show_notice(ctx, &mut self.notice);

        if self.has_work_in_flight() {
            // Keep polling the worker while a run is active
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(
            SESSION_KEY,
            self.session.get(SESSION_KEY).unwrap_or_default(),
        );
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(5)
    }
}
