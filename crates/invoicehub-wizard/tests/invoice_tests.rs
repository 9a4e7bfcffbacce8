use invoicehub_wizard::*;

#[test]
fn test_selecting_template_replaces_previous() {
    for first in TemplateId::ALL {
        for second in TemplateId::ALL {
            let mut draft = InvoiceDraft::new();
            draft.select_template(first);
            draft.select_template(second);
            assert_eq!(draft.selected_template(), Some(second));
        }
    }
}

#[test]
fn test_catalog_entries() {
    assert_eq!(TEMPLATES.len(), 4);
    assert_eq!(TemplateId::Basic.template().name, "Basic Invoice");
    assert_eq!(TemplateId::Detailed.template().format, TemplateFormat::Docx);
    assert_eq!(TemplateId::Receipt.template().name, "Simple Receipt");
    for id in TemplateId::ALL {
        assert_eq!(TemplateId::from_key(id.key()), Some(id));
        assert_eq!(id.template().id, id);
    }
    assert_eq!(TemplateId::from_key("fancy"), None);
}

#[test]
fn test_forward_blocked_without_template() {
    let mut wizard = InvoiceWizard::new();
    assert!(!wizard.forward());
    assert_eq!(wizard.step(), WizardStep::Selection);
    assert!(!wizard.go_to(WizardStep::Input));
    assert!(!wizard.go_to(WizardStep::Result));

    wizard.select_template(TemplateId::Professional);
    assert!(wizard.forward());
    assert_eq!(wizard.step(), WizardStep::Input);
}

#[test]
fn test_preview_requires_generation() {
    let mut wizard = InvoiceWizard::new();
    wizard.select_template(TemplateId::Basic);
    wizard.forward();

    assert!(!wizard.forward());
    assert!(wizard.draft.preview().is_none());

    let run = wizard.begin_generation().unwrap();
    assert_eq!(wizard.draft.status(), InvoiceStatus::Generating);
    assert!(!wizard.forward());

    assert!(wizard.complete_generation(run));
    assert!(wizard.shows_success_notice());
    assert!(wizard.forward());
    assert_eq!(wizard.step(), WizardStep::Result);
    assert!(!wizard.shows_success_notice());
}

#[test]
fn test_generation_without_template_fails() {
    let mut draft = InvoiceDraft::new();
    assert!(matches!(
        draft.begin_generation(),
        Err(WizardError::NoTemplateSelected)
    ));
    assert_eq!(draft.status(), InvoiceStatus::Editing);
}

#[test]
fn test_generation_rejected_while_in_flight() {
    let mut draft = InvoiceDraft::new();
    draft.select_template(TemplateId::Basic);
    let run = draft.begin_generation().unwrap();
    assert!(matches!(
        draft.begin_generation(),
        Err(WizardError::AlreadyRunning)
    ));
    assert!(draft.complete_generation(run));
    assert!(!draft.complete_generation(run));
    assert!(draft.is_generated());
}

#[test]
fn test_back_keeps_fields() {
    let mut wizard = InvoiceWizard::new();
    wizard.select_template(TemplateId::Basic);
    wizard.forward();
    wizard.draft.fields.set(InvoiceField::CustomerName, "Acme");
    wizard.draft.fields.set(InvoiceField::OrderNumber, "ORD-42");

    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Selection);
    assert!(wizard.forward());
    assert_eq!(wizard.draft.fields.get(InvoiceField::CustomerName), "Acme");
    assert_eq!(wizard.draft.fields.order_number, "ORD-42");
    assert_eq!(wizard.draft.selected_template(), Some(TemplateId::Basic));
}

#[test]
fn test_end_to_end_basic_invoice() {
    let mut wizard = InvoiceWizard::new();
    wizard.select_template(TemplateId::Basic);
    assert_eq!(wizard.draft.template().unwrap().name, "Basic Invoice");
    assert!(wizard.forward());

    wizard.draft.fields.set(InvoiceField::CustomerName, "Acme");
    wizard.draft.fields.set(InvoiceField::Price, "100");

    let run = wizard.begin_generation().unwrap();
    assert!(wizard.complete_generation(run));
    assert!(wizard.forward());

    let preview = wizard.draft.preview().unwrap();
    assert_eq!(preview.customer_name, "Acme");
    assert_eq!(preview.amount, "$100");
    assert_eq!(preview.total, "$100");

    let text = preview.to_lines().join("\n");
    assert!(text.contains("Acme"));
    assert!(text.contains("$100"));
}

#[test]
fn test_preview_placeholders() {
    let preview = InvoicePreview::from_fields(&InvoiceFields::default());
    assert_eq!(preview.company_name, "Your Company");
    assert_eq!(preview.serial_number, "#INV-001");
    assert_eq!(preview.customer_name, "Customer Name");
    assert_eq!(preview.invoice_date, "2023-05-19");
    assert_eq!(preview.order_number, "ORD-001");
    assert_eq!(preview.description, "Service Description");
    assert_eq!(preview.amount, "$0.00");
}

#[test]
fn test_fields_accessors_cover_every_field() {
    let mut fields = InvoiceFields::default();
    for (i, field) in InvoiceField::ALL.into_iter().enumerate() {
        fields.set(field, format!("value {i}"));
    }
    for (i, field) in InvoiceField::ALL.into_iter().enumerate() {
        assert_eq!(fields.get(field), format!("value {i}"));
    }
}

#[test]
fn test_download_is_a_notice() {
    let wizard = InvoiceWizard::new();
    assert!(wizard.download_notice().contains("download your generated invoice"));
}

#[test]
fn test_cancelled_generation_can_be_retried() {
    let mut wizard = InvoiceWizard::new();
    wizard.select_template(TemplateId::Basic);
    wizard.forward();

    let run = wizard.begin_generation().unwrap();
    assert!(wizard.cancel_generation(run));
    assert_eq!(wizard.draft.status(), InvoiceStatus::Editing);
    assert!(!wizard.complete_generation(run));
    assert!(!wizard.cancel_generation(run));

    let retry = wizard.begin_generation().unwrap();
    assert!(wizard.complete_generation(retry));
    assert!(wizard.draft.is_generated());
}
