use super::{Record, Section};
use crate::markup::{convert_code_block, convert_element, MarkupNode};
use crate::text::indent_continuation;

/// Use cases and public documentation of existing implementations
pub struct ReferencesSection;

/// Indentation of content nested under a second-level list item
const NESTED: &str = "    ";

impl Section for ReferencesSection {
    fn name(&self) -> &str {
        "references"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let references = Some(record.container("referenceImplementations")?);
        let mut block = String::from("## Reference Implementations\n\n");

        let use_cases = record.find_all_in(references, "useCases/useCase");
        if !use_cases.is_empty() {
            block.push_str("### Use Cases\n");
            for case in use_cases {
                block.push_str(&render_use_case(record, case));
            }
            block.push('\n');
        }

        let public_docs = record.find_all_in(references, "publicDocumentation");
        if !public_docs.is_empty() {
            block.push_str("### Public Documentation\n");
            for doc in public_docs {
                block.push_str(&render_public_doc(record, doc));
            }
            block.push('\n');
        }

        Some(block)
    }
}

fn render_use_case<'a>(record: &Record<'a>, case: &'a MarkupNode) -> String {
    let case = Some(case);
    let title = record.text_in(case, "useCasetitle");
    let institution = record.text_in(case, "institution/institutionLabel");
    let link = convert_element(record.find_in(case, "linkToDocumentation/hyperlink"));

    let mut out = format!("- **{title}**\n");
    out.push_str(&format!("  - **Institution:** {institution}\n"));
    if !link.is_empty() {
        out.push_str(&format!("  - **Documentation:** {link}\n"));
    }

    let problem = record.markup_in(case, "problemStatement");
    if !problem.is_empty() {
        let problem = indent_continuation(&problem, NESTED);
        out.push_str(&format!("  - **Problem:** {problem}\n"));
    }

    let language = &record.options().solution_language;
    if let Some(code) = convert_code_block(record.find_in(case, "proposedSolution"), language) {
        // Indented so the fence stays inside the list item.
        let code = indent_continuation(&code, NESTED);
        out.push_str(&format!("  - **Solution:**\n{NESTED}{code}\n"));
    }
    out
}

fn render_public_doc<'a>(record: &Record<'a>, doc: &'a MarkupNode) -> String {
    let doc = Some(doc);
    let institution = record.text_in(doc, "institution/institutionLabel");
    let link = convert_element(record.find_in(doc, "linkToDocumentation/hyperlink"));
    let comment = record.text_in(doc, "linkToDocumentation/comment");

    let mut out = format!("- **{institution}**\n");
    out.push_str(&format!("  - **Link:** {link}\n"));
    if !comment.is_empty() {
        out.push_str(&format!("  - **Comment:** {comment}\n"));
    }
    out
}
