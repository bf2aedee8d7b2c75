use crate::error::Result;
use crate::models::{DocumentType, FieldMap};
use regex::Regex;

/// One extraction rule: field name, compiled pattern, and which capture
/// group carries the value (0 for the whole match).
struct FieldPattern {
    name: &'static str,
    pattern: Regex,
    group: usize,
}

/// Ordered pattern tables, declared as (name, pattern, group). Every search
/// is leftmost-first and every field is independent of its siblings.
const INVOICE_PATTERNS: &[(&str, &str, usize)] = &[
    ("invoice_number", r"(?i)invoice[#:\s]*(\S+)", 1),
    ("date", r"\d{4}-\d{2}-\d{2}", 0),
    ("company", r"(?i)company[:\s]*([A-Za-z ]+)", 1),
    ("total_amount", r"\$([0-9.,]+)", 1),
];

const RESUME_PATTERNS: &[(&str, &str, usize)] = &[
    ("email", r"[\w.\-]+@[\w.\-]+", 0),
    ("phone", r"\+?\d[\d\s\-]{8,}", 0),
    ("experience_years", r"(\d+)\s+years", 1),
];

const UTILITY_BILL_PATTERNS: &[(&str, &str, usize)] = &[
    ("account_number", r"(?i)account number[:\s]*([A-Za-z0-9\-]+)", 1),
    ("date", r"\d{4}-\d{2}-\d{2}", 0),
    ("usage_kwh", r"(?i)(\d+)\s*kwh", 1),
    ("amount_due", r"\$([0-9.,]+)", 1),
];

/// Type-specific field extraction over normalized text. Patterns are
/// compiled once at construction; a bad pattern surfaces as a run-level
/// regex error instead of a silent miss.
pub struct FieldExtractor {
    invoice: Vec<FieldPattern>,
    resume: Vec<FieldPattern>,
    utility_bill: Vec<FieldPattern>,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            invoice: compile_table(INVOICE_PATTERNS)?,
            resume: compile_table(RESUME_PATTERNS)?,
            utility_bill: compile_table(UTILITY_BILL_PATTERNS)?,
        })
    }

    /// Dispatches on the label; labels without a schema yield an empty map.
    /// A pattern that does not match records the field as explicitly absent.
    pub fn extract(&self, label: DocumentType, text: &str) -> FieldMap {
        let table = match label {
            DocumentType::Invoice => &self.invoice,
            DocumentType::Resume => &self.resume,
            DocumentType::UtilityBill => &self.utility_bill,
            DocumentType::Other | DocumentType::Unclassifiable => return FieldMap::new(),
        };

        let mut fields = FieldMap::new();
        for entry in table {
            let value = entry.pattern.captures(text).and_then(|captures| {
                captures
                    .get(entry.group)
                    .map(|capture| capture.as_str().trim().to_string())
            });
            fields.insert(entry.name.to_string(), value);
        }

        if label == DocumentType::Resume {
            // First-line heuristic for the candidate name. Normalized text
            // has no newline left, so this captures the whole string.
            let name = text.lines().next().unwrap_or("").trim().to_string();
            fields.insert("name".to_string(), Some(name));
        }

        fields
    }
}

fn compile_table(table: &[(&'static str, &str, usize)]) -> Result<Vec<FieldPattern>> {
    table
        .iter()
        .map(|&(name, pattern, group)| {
            Ok(FieldPattern {
                name,
                pattern: Regex::new(pattern)?,
                group,
            })
        })
        .collect()
}
