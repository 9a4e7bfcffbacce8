use std::future::Future;
use std::time::Duration;

use invoicehub_wizard::{InvoiceFields, PdfFile, PdfOperation, RunId, SimulationTimings, TemplateId};
use tokio::sync::mpsc;

use crate::{DashboardCommand, DashboardUpdate};

/// Async worker task that runs simulated jobs and sends updates.
///
/// Every command becomes its own job, so a PDF run never holds up an invoice
/// generation and an abandoned run never delays the next one. The task ends
/// when every command sender is dropped; jobs still running finish on their
/// own and the update channel closes after the last one.
pub async fn worker_task(
    timings: SimulationTimings,
    mut command_rx: mpsc::UnboundedReceiver<DashboardCommand>,
    update_tx: mpsc::UnboundedSender<DashboardUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        spawn_job(process_command(cmd, timings, update_tx.clone()));
    }
    log::debug!("Worker stopped, command channel closed");
}

async fn process_command(
    cmd: DashboardCommand,
    timings: SimulationTimings,
    update_tx: mpsc::UnboundedSender<DashboardUpdate>,
) {
    match cmd {
        DashboardCommand::InvoiceGenerate {
            run,
            template,
            fields,
        } => {
            handle_generate_invoice(run, template, &fields, &timings, &update_tx).await;
        }
        DashboardCommand::PdfProcess {
            run,
            file,
            operation,
        } => {
            handle_process_pdf(run, &file, operation, &timings, &update_tx).await;
        }
    }
}

async fn handle_generate_invoice(
    run: RunId,
    template: TemplateId,
    fields: &InvoiceFields,
    timings: &SimulationTimings,
    update_tx: &mpsc::UnboundedSender<DashboardUpdate>,
) {
    log::info!(
        "Generating {} for {:?}",
        template.template().name,
        fields.customer_name
    );
    sleep(timings.generation_delay()).await;

    let _ = update_tx.send(DashboardUpdate::InvoiceGenerated { run, template });
    log::info!("Invoice generated (run {run})");
}

async fn handle_process_pdf(
    run: RunId,
    file: &PdfFile,
    operation: PdfOperation,
    timings: &SimulationTimings,
    update_tx: &mpsc::UnboundedSender<DashboardUpdate>,
) {
    log::info!("{}: {}", operation.title(), file.name);

    for percent in timings.progress_steps() {
        if update_tx
            .send(DashboardUpdate::PdfProgress {
                run,
                operation,
                percent,
            })
            .is_err()
        {
            // Nobody is listening any more
            return;
        }
        sleep(timings.progress_step()).await;
    }

    let _ = update_tx.send(DashboardUpdate::PdfProcessed {
        run,
        operation,
        file_name: file.name.clone(),
    });
    log::info!("{} finished for {}", operation.title(), file.name);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_job(job: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(job);
}

#[cfg(target_arch = "wasm32")]
fn spawn_job(job: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(job);
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        gloo_timers::future::sleep(duration).await;
    }
}
