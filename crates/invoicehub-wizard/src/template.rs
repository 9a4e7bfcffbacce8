/// Invoice templates offered by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemplateId {
    Basic,
    Professional,
    Detailed,
    Receipt,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Basic,
        TemplateId::Professional,
        TemplateId::Detailed,
        TemplateId::Receipt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TemplateId::Basic => "basic",
            TemplateId::Professional => "professional",
            TemplateId::Detailed => "detailed",
            TemplateId::Receipt => "receipt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn template(self) -> &'static Template {
        match self {
            TemplateId::Basic => &TEMPLATES[0],
            TemplateId::Professional => &TEMPLATES[1],
            TemplateId::Detailed => &TEMPLATES[2],
            TemplateId::Receipt => &TEMPLATES[3],
        }
    }
}

/// Document format a template renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Pdf,
    Docx,
}

impl TemplateFormat {
    pub fn name(self) -> &'static str {
        match self {
            TemplateFormat::Pdf => "PDF",
            TemplateFormat::Docx => "DOCX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub format: TemplateFormat,
}

pub const TEMPLATES: [Template; 4] = [
    Template {
        id: TemplateId::Basic,
        name: "Basic Invoice",
        format: TemplateFormat::Pdf,
    },
    Template {
        id: TemplateId::Professional,
        name: "Professional Invoice",
        format: TemplateFormat::Pdf,
    },
    Template {
        id: TemplateId::Detailed,
        name: "Detailed Invoice",
        format: TemplateFormat::Docx,
    },
    Template {
        id: TemplateId::Receipt,
        name: "Simple Receipt",
        format: TemplateFormat::Pdf,
    },
];
