use crate::error::ExtractError;
use lopdf::Document;
use std::fs;
use std::path::Path;

/// Raw-text extraction seam. The pipeline only sees a string or a failure;
/// tests substitute fakes here.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Default extractor: PDFs through lopdf, everything else read as UTF-8.
#[derive(Default)]
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        if is_pdf(path) {
            extract_pdf_text(path)
        } else {
            Ok(fs::read_to_string(path)?)
        }
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Page texts joined with a single newline. A page with no text contributes
/// an empty string rather than being skipped, so the page count stays
/// derivable from the newline count.
fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let document =
        Document::load(path).map_err(|error| ExtractError::PdfParse(error.to_string()))?;

    let mut pages = Vec::new();
    for (page_no, _page_id) in document.get_pages() {
        let text = document
            .extract_text(&[page_no])
            .map_err(|error| ExtractError::PdfParse(error.to_string()))?;
        pages.push(text);
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn plain_text_is_read_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("note.txt");
        fs::write(&path, "Invoice #A123\ntotal amount $10")?;

        let text = FileTextExtractor.extract_text(&path)?;
        assert_eq!(text, "Invoice #A123\ntotal amount $10");
        Ok(())
    }

    #[test]
    fn missing_file_is_an_extract_error() {
        let result = FileTextExtractor.extract_text(Path::new("/nonexistent/doc.txt"));
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }

    #[test]
    fn invalid_utf8_is_an_extract_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("binary.dat");
        File::create(&path).and_then(|mut file| file.write_all(&[0xff, 0xfe, 0x00, 0x80]))?;

        let result = FileTextExtractor.extract_text(&path);
        assert!(matches!(result, Err(ExtractError::Io(_))));
        Ok(())
    }

    #[test]
    fn corrupt_pdf_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n%not really a pdf")?;

        let result = FileTextExtractor.extract_text(&path);
        assert!(matches!(result, Err(ExtractError::PdfParse(_))));
        Ok(())
    }
}
