use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use invoicehub_async_runtime::{DashboardCommand, DashboardUpdate, worker_task};
use invoicehub_wizard::{
    FileStore, InvoiceFields, InvoiceWizard, PdfFile, PdfOperation, PdfWizard, SessionGate,
    SimulationTimings, TEMPLATES, TemplateId,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Parser)]
#[command(name = "invoicehub", about = "InvoiceHub invoice and PDF tools", version)]
struct Cli {
    /// Where the session flag is kept
    #[arg(long, global = true, default_value = "invoicehub-session.json")]
    session_file: PathBuf,

    /// JSON file with simulation timings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (sets the session flag)
    Login,

    /// Sign out (clears the session flag)
    Logout,

    /// Show whether a session is active
    Status,

    /// List invoice templates
    Templates,

    /// Generate an invoice and print its preview
    Invoice {
        /// Invoice template
        #[arg(short, long, value_enum)]
        template: TemplateArg,

        #[arg(long, default_value_t)]
        customer_name: String,

        #[arg(long, default_value_t)]
        company_name: String,

        #[arg(long, default_value_t)]
        price: String,

        #[arg(long, default_value_t)]
        order_number: String,

        /// Free-form date, e.g. 2024-01-31
        #[arg(long, default_value_t)]
        invoice_date: String,

        #[arg(long, default_value_t)]
        serial_number: String,

        #[arg(long, default_value_t)]
        description: String,
    },

    /// Run a PDF tool on a file
    Pdf {
        /// Input PDF file
        file: PathBuf,

        /// Tool to run
        #[arg(long, default_value = "clean", value_enum)]
        operation: OperationArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TemplateArg {
    Basic,
    Professional,
    Detailed,
    Receipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OperationArg {
    Clean,
    StripMetadata,
}

impl From<TemplateArg> for TemplateId {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Basic => Self::Basic,
            TemplateArg::Professional => Self::Professional,
            TemplateArg::Detailed => Self::Detailed,
            TemplateArg::Receipt => Self::Receipt,
        }
    }
}

impl From<OperationArg> for PdfOperation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Clean => Self::Clean,
            OperationArg::StripMetadata => Self::StripMetadata,
        }
    }
}

type Channels = (
    mpsc::UnboundedSender<DashboardCommand>,
    mpsc::UnboundedReceiver<DashboardUpdate>,
    JoinHandle<()>,
);

fn spawn_worker(timings: SimulationTimings) -> Channels {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(worker_task(timings, command_rx, update_tx));
    (command_tx, update_rx, handle)
}

async fn load_timings(config: Option<&Path>) -> Result<SimulationTimings> {
    match config {
        Some(path) => SimulationTimings::load(path)
            .await
            .with_context(|| format!("Loading {}", path.display())),
        None => Ok(SimulationTimings::default()),
    }
}

async fn generate_invoice(
    timings: SimulationTimings,
    template: TemplateId,
    fields: InvoiceFields,
) -> Result<InvoiceWizard> {
    let mut wizard = InvoiceWizard::new();
    wizard.select_template(template);
    wizard.forward();
    wizard.draft.fields = fields;

    let run = wizard.begin_generation()?;
    println!("Generating {}...", template.template().name);

    let (command_tx, mut update_rx, worker) = spawn_worker(timings);
    command_tx
        .send(DashboardCommand::InvoiceGenerate {
            run,
            template,
            fields: wizard.draft.fields.clone(),
        })
        .map_err(|_| anyhow!("Worker stopped before generating"))?;
    drop(command_tx);

    while let Some(update) = update_rx.recv().await {
        if let DashboardUpdate::InvoiceGenerated { run, .. } = update {
            wizard.complete_generation(run);
        }
    }
    worker.await?;

    if !wizard.forward() {
        return Err(anyhow!("Invoice generation did not complete"));
    }
    Ok(wizard)
}

async fn process_pdf(
    timings: SimulationTimings,
    path: &Path,
    operation: PdfOperation,
) -> Result<PdfWizard> {
    let file = PdfFile::from_path(path)
        .await
        .with_context(|| format!("Reading {}", path.display()))?;

    let mut wizard = PdfWizard::new();
    wizard.select_file(file)?;
    let run = wizard.begin_run(operation)?;
    let file = wizard
        .task
        .file()
        .cloned()
        .ok_or_else(|| anyhow!("No file selected"))?;
    println!("{}: {} ({})", operation.title(), file.name, file.size_label());

    let (command_tx, mut update_rx, worker) = spawn_worker(timings);
    command_tx
        .send(DashboardCommand::PdfProcess {
            run,
            file,
            operation,
        })
        .map_err(|_| anyhow!("Worker stopped before processing"))?;
    drop(command_tx);

    let mut stdout = std::io::stdout();
    while let Some(update) = update_rx.recv().await {
        match update {
            DashboardUpdate::PdfProgress { run, percent, .. } => {
                if wizard.record_progress(run, percent) {
                    print!("\r{} {:>3}%", operation.progress_label(), percent);
                    stdout.flush()?;
                }
            }
            DashboardUpdate::PdfProcessed { run, .. } => {
                wizard.finish_run(run);
            }
            DashboardUpdate::InvoiceGenerated { .. } => {}
        }
    }
    println!();
    worker.await?;

    if !wizard.task.is_done() {
        return Err(anyhow!("{} did not complete", operation.title()));
    }
    Ok(wizard)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut session = FileStore::open(&cli.session_file)
        .await
        .with_context(|| format!("Opening session {}", cli.session_file.display()))?;

    match cli.command {
        Commands::Login => {
            let landing = SessionGate::login(&mut session);
            session.save().await?;
            println!("Signed in → {}", landing);
        }

        Commands::Logout => {
            SessionGate::logout(&mut session);
            session.save().await?;
            println!("Signed out");
        }

        Commands::Status => {
            if SessionGate::is_signed_in(&session) {
                println!("Signed in ({})", session.path().display());
            } else {
                println!("Not signed in");
            }
        }

        Commands::Templates => {
            for template in TEMPLATES.iter() {
                println!(
                    "{:<14}{:<24}{}",
                    template.id.key(),
                    template.name,
                    template.format.name()
                );
            }
        }

        Commands::Invoice {
            template,
            customer_name,
            company_name,
            price,
            order_number,
            invoice_date,
            serial_number,
            description,
        } => {
            SessionGate::require(&session).context("Run `invoicehub login` first")?;
            let timings = load_timings(cli.config.as_deref()).await?;

            let fields = InvoiceFields {
                customer_name,
                company_name,
                price,
                order_number,
                invoice_date,
                serial_number,
                description,
            };
            let wizard = generate_invoice(timings, template.into(), fields).await?;

            println!("Invoice generated successfully!");
            println!();
            if let Some(preview) = wizard.draft.preview() {
                for line in preview.to_lines() {
                    println!("  {}", line);
                }
            }
            println!();
            println!("{}", wizard.download_notice());
        }

        Commands::Pdf { file, operation } => {
            SessionGate::require(&session).context("Run `invoicehub login` first")?;
            let timings = load_timings(cli.config.as_deref()).await?;

            let operation: PdfOperation = operation.into();
            let wizard = process_pdf(timings, &file, operation).await?;

            println!("{}", operation.success_message());
            if let Some(entries) = wizard.task.removed_metadata() {
                println!("Removed Metadata:");
                for entry in entries {
                    println!("  {:<14}{}", format!("{}:", entry.label), entry.value);
                }
            }
            println!("{}", wizard.download_notice());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_args() {
        let cli = Cli::try_parse_from([
            "invoicehub",
            "invoice",
            "--template",
            "professional",
            "--customer-name",
            "Acme",
            "--price",
            "100",
        ])
        .unwrap();

        match cli.command {
            Commands::Invoice {
                template,
                customer_name,
                price,
                company_name,
                ..
            } => {
                assert_eq!(TemplateId::from(template), TemplateId::Professional);
                assert_eq!(customer_name, "Acme");
                assert_eq!(price, "100");
                assert!(company_name.is_empty());
            }
            _ => panic!("expected invoice command"),
        }
        assert_eq!(cli.session_file, PathBuf::from("invoicehub-session.json"));
    }

    #[test]
    fn test_pdf_args() {
        let cli = Cli::try_parse_from([
            "invoicehub",
            "--session-file",
            "/tmp/s.json",
            "pdf",
            "report.pdf",
            "--operation",
            "strip-metadata",
        ])
        .unwrap();

        match cli.command {
            Commands::Pdf { file, operation } => {
                assert_eq!(file, PathBuf::from("report.pdf"));
                assert_eq!(PdfOperation::from(operation), PdfOperation::StripMetadata);
            }
            _ => panic!("expected pdf command"),
        }
        assert_eq!(cli.session_file, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_template_required() {
        assert!(Cli::try_parse_from(["invoicehub", "invoice"]).is_err());
    }

    #[tokio::test]
    async fn test_generate_invoice_instant() {
        let fields = InvoiceFields {
            customer_name: "Acme".to_string(),
            price: "100".to_string(),
            ..Default::default()
        };
        let wizard = generate_invoice(SimulationTimings::instant(), TemplateId::Basic, fields)
            .await
            .unwrap();

        let preview = wizard.draft.preview().unwrap();
        assert_eq!(preview.customer_name, "Acme");
        assert_eq!(preview.total, "$100");
    }

    #[tokio::test]
    async fn test_process_pdf_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        tokio::fs::write(&path, b"hello").await.unwrap();

        let err = process_pdf(SimulationTimings::instant(), &path, PdfOperation::Clean)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Please upload a PDF file"));
    }

    #[tokio::test]
    async fn test_process_pdf_strip_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        tokio::fs::write(&path, b"%PDF-1.7").await.unwrap();

        let wizard = process_pdf(
            SimulationTimings::instant(),
            &path,
            PdfOperation::StripMetadata,
        )
        .await
        .unwrap();

        assert_eq!(wizard.task.progress(), 100);
        assert_eq!(wizard.task.removed_metadata().map(|m| m.len()), Some(5));
    }
}
