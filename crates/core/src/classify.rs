use crate::models::DocumentType;

/// Ordered classification rules over lowercased normalized text. Evaluated
/// top to bottom, first match wins; the order is a deliberate tie-break, so
/// a document carrying both invoice and resume keywords is an Invoice.
const RULES: &[(DocumentType, fn(&str) -> bool)] = &[
    (DocumentType::Invoice, invoice_keywords),
    (DocumentType::UtilityBill, utility_bill_keywords),
    (DocumentType::Resume, resume_keywords),
];

fn invoice_keywords(text: &str) -> bool {
    text.contains("invoice") || text.contains("total amount")
}

fn utility_bill_keywords(text: &str) -> bool {
    text.contains("account number") || text.contains("usage") || text.contains("amount due")
}

fn resume_keywords(text: &str) -> bool {
    (text.contains("experience") && text.contains("email"))
        || (text.contains("summary") && text.contains("phone"))
}

/// Assigns exactly one label to normalized text. Keyword tests are
/// case-insensitive; empty text is Unclassifiable, anything that matches no
/// rule falls back to Other.
pub fn classify_document(text: &str) -> DocumentType {
    let lowered = text.to_lowercase();

    for (label, matches) in RULES {
        if matches(&lowered) {
            return *label;
        }
    }

    if lowered.trim().is_empty() {
        DocumentType::Unclassifiable
    } else {
        DocumentType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_keyword_classifies_as_invoice() {
        assert_eq!(classify_document("INVOICE #42 from Acme"), DocumentType::Invoice);
        assert_eq!(classify_document("the total amount is listed"), DocumentType::Invoice);
    }

    #[test]
    fn invoice_rule_wins_over_later_rules() {
        // Mentions resume and bill keywords too; priority order decides.
        let text = "invoice for consulting. experience and email on file, account number 7";
        assert_eq!(classify_document(text), DocumentType::Invoice);
    }

    #[test]
    fn utility_bill_keywords_classify_as_bill() {
        assert_eq!(classify_document("Account Number: XJ-1"), DocumentType::UtilityBill);
        assert_eq!(classify_document("monthly usage report"), DocumentType::UtilityBill);
        assert_eq!(classify_document("Amount Due by Friday"), DocumentType::UtilityBill);
    }

    #[test]
    fn resume_requires_paired_keywords() {
        assert_eq!(
            classify_document("Experience: 5 years. Email: a@b.com"),
            DocumentType::Resume
        );
        assert_eq!(
            classify_document("Summary of skills. Phone: 555-0100"),
            DocumentType::Resume
        );
        // One keyword alone is not enough for either pair.
        assert_eq!(classify_document("email me sometime"), DocumentType::Other);
    }

    #[test]
    fn empty_text_is_unclassifiable() {
        assert_eq!(classify_document(""), DocumentType::Unclassifiable);
    }

    #[test]
    fn unmatched_text_is_other() {
        assert_eq!(classify_document("meeting notes for tuesday"), DocumentType::Other);
    }
}
