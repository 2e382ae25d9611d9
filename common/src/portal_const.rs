//! Fixed reference lists and limits shared by the portal views.

/// Experimental strategies highlighted on the case page, in display order.
pub const EXPERIMENTAL_STRATEGIES: &[&str] = &[
    "Genotyping Array",
    "Gene Expression Array",
    "Exon Array",
    "miRNA Expression Array",
    "Methylation Array",
    "CGH Array",
    "MSI-Mono-Dinucleotide Assay",
    "WGS",
    "WGA",
    "WXS",
    "RNA-Seq",
    "miRNA-Seq",
    "ncRNA-Seq",
    "WCS",
    "CLONE",
    "POOLCLONE",
    "AMPLICON",
    "CLONEEND",
    "FINISHING",
    "ChIP-Seq",
    "MNase-Seq",
    "DNase-Hypersensitivity",
    "Bisulfite-Seq",
    "EST",
    "FL-cDNA",
    "CTS",
    "MRE-Seq",
    "MeDIP-Seq",
    "MBD-Seq",
    "Tn-Seq",
    "FAIRE-seq",
    "SELEX",
    "RIP-Seq",
    "ChIA-PET",
    "DNA-Seq",
    "Total RNA-Seq",
    "VALIDATION",
    "OTHER",
    "Diagnostic Slide",
    "Tissue Slide",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCategoryDef {
    pub key: &'static str,
    pub full: &'static str,
    pub abbr: &'static str,
}

/// Data categories always listed on the case page and in the explore table.
pub const DATA_CATEGORIES: &[DataCategoryDef] = &[
    DataCategoryDef { key: "SEQ", full: "Sequencing Reads", abbr: "Seq" },
    DataCategoryDef { key: "EXP", full: "Transcriptome Profiling", abbr: "Exp" },
    DataCategoryDef { key: "SNV", full: "Simple Nucleotide Variation", abbr: "SNV" },
    DataCategoryDef { key: "CNV", full: "Copy Number Variation", abbr: "CNV" },
    DataCategoryDef { key: "METH", full: "DNA Methylation", abbr: "Meth" },
    DataCategoryDef { key: "CLINICAL", full: "Clinical", abbr: "Clinical" },
    DataCategoryDef { key: "BIOSPECIMEN", full: "Biospecimen", abbr: "Bio" },
];

pub fn data_category_by_key(key: &str) -> Option<&'static DataCategoryDef> {
    DATA_CATEGORIES.iter().find(|c| c.key == key)
}

pub const MAX_CART_SIZE: usize = 10_000;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const PAGE_SIZE_OPTIONS: &[u64] = &[10, 20, 40, 60, 80, 100];

/// Exports of all matching cases stop after this many rows.
pub const MAX_EXPORT_ROWS: u64 = 10_000;

pub const REPOSITORY_PATH: &str = "/repository";
pub const ANNOTATIONS_PATH: &str = "/annotations";
pub const PROJECTS_PATH: &str = "/projects";
pub const EXPLORATION_PATH: &str = "/exploration";
pub const CASES_PATH: &str = "/cases";
