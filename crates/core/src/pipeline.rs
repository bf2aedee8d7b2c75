use crate::classify::classify_document;
use crate::error::Result;
use crate::extractor::TextExtractor;
use crate::fields::FieldExtractor;
use crate::models::{DocumentRecord, MatchRecord, SearchHit};
use crate::normalize::normalize_whitespace;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every regular file under the folder, recursively, in sorted order so a
/// run enumerates its corpus deterministically.
pub fn discover_documents(folder: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .into_iter()
        .filter_map(|item| item.ok())
    {
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort_unstable();
    files
}

/// A source whose raw text could not be obtained. The document still gets
/// an Unclassifiable record; this only carries the reason for reporting.
pub struct UnreadableDocument {
    pub document_id: String,
    pub reason: String,
}

pub struct CorpusReport {
    pub records: BTreeMap<String, DocumentRecord>,
    pub unreadable: Vec<UnreadableDocument>,
}

/// Runs one document at a time through extraction, normalization,
/// classification, and field extraction.
pub struct CorpusProcessor<X: TextExtractor> {
    extractor: X,
    fields: FieldExtractor,
}

impl<X: TextExtractor> CorpusProcessor<X> {
    pub fn new(extractor: X) -> Result<Self> {
        Ok(Self {
            extractor,
            fields: FieldExtractor::new()?,
        })
    }

    /// Normalize, classify, and extract fields for one document's raw text.
    pub fn process_text(&self, raw: &str) -> DocumentRecord {
        let text = normalize_whitespace(raw);
        let label = classify_document(&text);
        let fields = self.fields.extract(label, &text);
        DocumentRecord {
            label,
            text,
            fields,
        }
    }

    /// One record per discovered file, keyed by path relative to the input
    /// folder. Extraction failures become Unclassifiable records with empty
    /// text and fields; the run keeps going.
    pub fn process_folder(&self, folder: &Path) -> Result<CorpusReport> {
        let mut records = BTreeMap::new();
        let mut unreadable = Vec::new();

        for path in discover_documents(folder) {
            let document_id = path
                .strip_prefix(folder)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();

            let record = match self.extractor.extract_text(&path) {
                Ok(raw) => self.process_text(&raw),
                Err(error) => {
                    unreadable.push(UnreadableDocument {
                        document_id: document_id.clone(),
                        reason: error.to_string(),
                    });
                    DocumentRecord::unreadable()
                }
            };

            records.insert(document_id, record);
        }

        Ok(CorpusReport {
            records,
            unreadable,
        })
    }
}

/// Assembles the search report: each matched document's record (text
/// omitted) plus its similarity score, keyed by document id.
pub fn match_report(
    hits: &[SearchHit],
    records: &BTreeMap<String, DocumentRecord>,
) -> BTreeMap<String, MatchRecord> {
    hits.iter()
        .filter_map(|hit| {
            records.get(&hit.document_id).map(|record| {
                (
                    hit.document_id.clone(),
                    MatchRecord {
                        label: record.label,
                        fields: record.fields.clone(),
                        similarity_score: hit.score,
                    },
                )
            })
        })
        .collect()
}
