use crate::step::{StepController, StepGuard, WizardStep};
use crate::template::{Template, TemplateId};
use crate::types::{Result, RunId, WizardError};

/// Named text fields of an invoice draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    CustomerName,
    CompanyName,
    Price,
    OrderNumber,
    InvoiceDate,
    SerialNumber,
    Description,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 7] = [
        InvoiceField::CustomerName,
        InvoiceField::CompanyName,
        InvoiceField::Price,
        InvoiceField::OrderNumber,
        InvoiceField::InvoiceDate,
        InvoiceField::SerialNumber,
        InvoiceField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvoiceField::CustomerName => "Customer Name",
            InvoiceField::CompanyName => "Company Name",
            InvoiceField::Price => "Price",
            InvoiceField::OrderNumber => "Order Number",
            InvoiceField::InvoiceDate => "Invoice Date",
            InvoiceField::SerialNumber => "Serial Number",
            InvoiceField::Description => "Description",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            InvoiceField::CustomerName => "Enter customer name",
            InvoiceField::CompanyName => "Enter your company name",
            InvoiceField::Price => "Enter price",
            InvoiceField::OrderNumber => "Enter order number",
            InvoiceField::InvoiceDate => "YYYY-MM-DD",
            InvoiceField::SerialNumber => "Enter serial number",
            InvoiceField::Description => "Enter description",
        }
    }
}

/// Free-form, unvalidated invoice text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct InvoiceFields {
    pub customer_name: String,
    pub company_name: String,
    pub price: String,
    pub order_number: String,
    pub invoice_date: String,
    pub serial_number: String,
    pub description: String,
}

impl InvoiceFields {
    pub fn get(&self, field: InvoiceField) -> &str {
        match field {
            InvoiceField::CustomerName => &self.customer_name,
            InvoiceField::CompanyName => &self.company_name,
            InvoiceField::Price => &self.price,
            InvoiceField::OrderNumber => &self.order_number,
            InvoiceField::InvoiceDate => &self.invoice_date,
            InvoiceField::SerialNumber => &self.serial_number,
            InvoiceField::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: InvoiceField) -> &mut String {
        match field {
            InvoiceField::CustomerName => &mut self.customer_name,
            InvoiceField::CompanyName => &mut self.company_name,
            InvoiceField::Price => &mut self.price,
            InvoiceField::OrderNumber => &mut self.order_number,
            InvoiceField::InvoiceDate => &mut self.invoice_date,
            InvoiceField::SerialNumber => &mut self.serial_number,
            InvoiceField::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: InvoiceField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    #[default]
    Editing,
    Generating,
    Generated,
}

/// Session-scoped invoice state
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    selected_template: Option<TemplateId>,
    pub fields: InvoiceFields,
    status: InvoiceStatus,
    run: RunId,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_template(&self) -> Option<TemplateId> {
        self.selected_template
    }

    pub fn template(&self) -> Option<&'static Template> {
        self.selected_template.map(TemplateId::template)
    }

    /// Single-select: replaces any earlier choice.
    pub fn select_template(&mut self, id: TemplateId) {
        if self.selected_template != Some(id) {
            log::debug!("Selected template {}", id.key());
        }
        self.selected_template = Some(id);
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        self.status == InvoiceStatus::Generating
    }

    pub fn is_generated(&self) -> bool {
        self.status == InvoiceStatus::Generated
    }

    /// Start a generation run. The returned id must be passed back to
    /// [`InvoiceDraft::complete_generation`].
    pub fn begin_generation(&mut self) -> Result<RunId> {
        if self.selected_template.is_none() {
            return Err(WizardError::NoTemplateSelected);
        }
        if self.is_generating() {
            return Err(WizardError::AlreadyRunning);
        }
        self.run = RunId::fresh();
        self.status = InvoiceStatus::Generating;
        Ok(self.run)
    }

    /// Returns false if `run` is not the run in flight.
    pub fn complete_generation(&mut self, run: RunId) -> bool {
        if run != self.run || !self.is_generating() {
            log::debug!("Ignoring completion of stale generation run {run}");
            return false;
        }
        self.status = InvoiceStatus::Generated;
        true
    }

    /// Abandon `run` and return to editing. Used when the run never started.
    pub fn cancel_generation(&mut self, run: RunId) -> bool {
        if run != self.run || !self.is_generating() {
            return false;
        }
        log::debug!("Cancelled generation run {run}");
        self.status = InvoiceStatus::Editing;
        self.run = RunId::fresh();
        true
    }

    /// Rendered preview, available once generated.
    pub fn preview(&self) -> Option<InvoicePreview> {
        self.is_generated()
            .then(|| InvoicePreview::from_fields(&self.fields))
    }
}

impl StepGuard for InvoiceDraft {
    fn has_selection(&self) -> bool {
        self.selected_template.is_some()
    }

    fn is_complete(&self) -> bool {
        self.is_generated()
    }
}

/// Text of a rendered invoice, with placeholders for empty fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicePreview {
    pub company_name: String,
    pub company_address: String,
    pub serial_number: String,
    pub customer_name: String,
    pub customer_address: String,
    pub invoice_date: String,
    pub order_number: String,
    pub description: String,
    pub amount: String,
    pub total: String,
    pub footer: [&'static str; 2],
}

impl InvoicePreview {
    pub fn from_fields(fields: &InvoiceFields) -> Self {
        let amount = format!("${}", or_placeholder(&fields.price, "0.00"));
        Self {
            company_name: or_placeholder(&fields.company_name, "Your Company"),
            company_address: "123 Business St, City, Country".to_string(),
            serial_number: format!("#{}", or_placeholder(&fields.serial_number, "INV-001")),
            customer_name: or_placeholder(&fields.customer_name, "Customer Name"),
            customer_address: "Customer Address".to_string(),
            invoice_date: or_placeholder(&fields.invoice_date, "2023-05-19"),
            order_number: or_placeholder(&fields.order_number, "ORD-001"),
            description: or_placeholder(&fields.description, "Service Description"),
            total: amount.clone(),
            amount,
            footer: [
                "Thank you for your business!",
                "Payment is due within 30 days.",
            ],
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("{:<40}{:>30}", self.company_name, "INVOICE"),
            format!("{:<40}{:>30}", self.company_address, self.serial_number),
            String::new(),
            "Bill To:".to_string(),
            format!("{:<40}Invoice Date: {}", self.customer_name, self.invoice_date),
            format!("{:<40}Order Number: {}", self.customer_address, self.order_number),
            String::new(),
            format!("{:<50}{:>20}", "Description", "Amount"),
            format!("{:<50}{:>20}", self.description, self.amount),
            format!("{:<50}{:>20}", "Total", self.total),
            String::new(),
            self.footer[0].to_string(),
            self.footer[1].to_string(),
        ]
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Template selection → details → preview
#[derive(Debug, Clone, Default)]
pub struct InvoiceWizard {
    pub draft: InvoiceDraft,
    steps: StepController,
}

impl InvoiceWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.steps.current()
    }

    pub fn can_enter(&self, step: WizardStep) -> bool {
        self.steps.can_enter(step, &self.draft)
    }

    pub fn select_template(&mut self, id: TemplateId) {
        self.draft.select_template(id);
    }

    pub fn forward(&mut self) -> bool {
        self.steps.forward(&self.draft)
    }

    pub fn back(&mut self) -> bool {
        self.steps.back()
    }

    pub fn go_to(&mut self, step: WizardStep) -> bool {
        self.steps.go_to(step, &self.draft)
    }

    pub fn begin_generation(&mut self) -> Result<RunId> {
        self.draft.begin_generation()
    }

    pub fn complete_generation(&mut self, run: RunId) -> bool {
        self.draft.complete_generation(run)
    }

    pub fn cancel_generation(&mut self, run: RunId) -> bool {
        self.draft.cancel_generation(run)
    }

    /// Whether the "generated, go preview" notice belongs on screen.
    pub fn shows_success_notice(&self) -> bool {
        self.draft.is_generated() && self.step() == WizardStep::Input
    }

    pub fn download_notice(&self) -> &'static str {
        "In a real app, this would download your generated invoice as a PDF."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_for_empty() {
        assert_eq!(or_placeholder("", "x"), "x");
        assert_eq!(or_placeholder(" ", "x"), " ");
    }
}
