use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of document-type labels assigned by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Invoice,
    #[serde(rename = "Utility Bill")]
    UtilityBill,
    Resume,
    Other,
    Unclassifiable,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "Invoice",
            DocumentType::UtilityBill => "Utility Bill",
            DocumentType::Resume => "Resume",
            DocumentType::Other => "Other",
            DocumentType::Unclassifiable => "Unclassifiable",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted field name to value. `None` marks a pattern that did not match;
/// it still serializes (as JSON null) so the output schema stays stable.
pub type FieldMap = BTreeMap<String, Option<String>>;

/// One processed document. The normalized text is kept for embedding but
/// never serialized into reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(rename = "class")]
    pub label: DocumentType,
    #[serde(skip)]
    pub text: String,
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl DocumentRecord {
    /// Record for a source whose raw text could not be obtained.
    pub fn unreadable() -> Self {
        Self {
            label: DocumentType::Unclassifiable,
            text: String::new(),
            fields: FieldMap::new(),
        }
    }
}

/// One ranked search result: document identifier and cosine score in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub document_id: String,
    pub score: f64,
}

/// A matched document as it appears in the search report: the record's
/// classification and fields plus the similarity score, text omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "class")]
    pub label: DocumentType,
    #[serde(flatten)]
    pub fields: FieldMap,
    pub similarity_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serialization_omits_text_and_flattens_fields() {
        let mut fields = FieldMap::new();
        fields.insert("invoice_number".to_string(), Some("A123".to_string()));
        fields.insert("company".to_string(), None);

        let record = DocumentRecord {
            label: DocumentType::Invoice,
            text: "should not appear".to_string(),
            fields,
        };

        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["class"], "Invoice");
        assert_eq!(json["invoice_number"], "A123");
        assert!(json["company"].is_null());
        assert!(json.get("text").is_none());
    }

    #[test]
    fn record_round_trip_preserves_label_and_fields() {
        let mut fields = FieldMap::new();
        fields.insert("account_number".to_string(), Some("XJ-9981".to_string()));

        let record = DocumentRecord {
            label: DocumentType::UtilityBill,
            text: "normalized text".to_string(),
            fields: fields.clone(),
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let back: DocumentRecord = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.label, DocumentType::UtilityBill);
        assert_eq!(back.fields, fields);
        assert!(back.text.is_empty());
    }

    #[test]
    fn utility_bill_label_uses_spaced_name() {
        let json = serde_json::to_string(&DocumentType::UtilityBill).expect("serialize");
        assert_eq!(json, "\"Utility Bill\"");
    }
}
