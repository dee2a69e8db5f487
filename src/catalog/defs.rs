use super::{Biomarker, BiomarkerCatalog, Indication};

#[derive(Debug, Clone, Copy)]
pub struct BiomarkerDef {
    pub name: &'static str,
    pub category: &'static str,
    pub indication: &'static str,
}

pub const BUILTIN_BIOMARKERS: &[BiomarkerDef] = &[
    BiomarkerDef {
        name: "MUC1",
        category: "Mucins",
        indication: "↑",
    },
    BiomarkerDef {
        name: "MUC4",
        category: "Mucins",
        indication: "↑",
    },
    BiomarkerDef {
        name: "MUC5AC",
        category: "Mucins",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CA 19-9",
        category: "Carbohydrate antigens",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CA 125",
        category: "Carbohydrate antigens",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CA 242",
        category: "Carbohydrate antigens",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CEA",
        category: "Oncofetal antigens",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CA 72-4",
        category: "Oncofetal antigens",
        indication: "↑",
    },
    BiomarkerDef {
        name: "MSLN",
        category: "Cell surface receptors",
        indication: "↑",
    },
    BiomarkerDef {
        name: "EPCAM",
        category: "Cell surface receptors",
        indication: "↑",
    },
    BiomarkerDef {
        name: "EGFR",
        category: "Cell surface receptors",
        indication: "↑",
    },
    BiomarkerDef {
        name: "ERBB2",
        category: "Cell surface receptors",
        indication: "↑",
    },
    BiomarkerDef {
        name: "TGFB1",
        category: "Growth and signaling factors",
        indication: "↑/↓",
    },
    BiomarkerDef {
        name: "KLF4",
        category: "Growth and signaling factors",
        indication: "↑/↓",
    },
    BiomarkerDef {
        name: "VEGFA",
        category: "Growth and signaling factors",
        indication: "↑",
    },
    BiomarkerDef {
        name: "SMAD4",
        category: "Tumor suppressors",
        indication: "↓",
    },
    BiomarkerDef {
        name: "CDKN2A",
        category: "Tumor suppressors",
        indication: "↓",
    },
    BiomarkerDef {
        name: "TP53",
        category: "Tumor suppressors",
        indication: "↓",
    },
    BiomarkerDef {
        name: "PTEN",
        category: "Tumor suppressors",
        indication: "↓",
    },
    BiomarkerDef {
        name: "MMP7",
        category: "Proteolytic enzymes",
        indication: "↑",
    },
    BiomarkerDef {
        name: "MMP9",
        category: "Proteolytic enzymes",
        indication: "↑",
    },
    BiomarkerDef {
        name: "TIMP1",
        category: "Inflammatory markers",
        indication: "↑",
    },
    BiomarkerDef {
        name: "OPN",
        category: "Inflammatory markers",
        indication: "↑",
    },
    BiomarkerDef {
        name: "CRP",
        category: "Inflammatory markers",
        indication: "—",
    },
];

/// Catalog shipped with the tool, used whenever no catalog file is given.
pub fn builtin_catalog() -> BiomarkerCatalog {
    let entries = BUILTIN_BIOMARKERS
        .iter()
        .map(|def| Biomarker {
            name: def.name.to_string(),
            category: def.category.to_string(),
            indication: Indication::from_symbol(def.indication),
        })
        .collect();
    BiomarkerCatalog::from_entries(entries)
}
