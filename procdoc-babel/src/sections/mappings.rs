use super::{Record, Section};
use crate::markup::convert;
use crate::text::indent_continuation;

/// Correspondence with external frameworks
pub struct MappingsSection;

impl Section for MappingsSection {
    fn name(&self) -> &str {
        "mappings"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let mappings = record.container("frameworkMappings")?;
        let mut block = String::from("## Framework Mappings\n\n");

        for mapping in record.find_all_in(Some(mappings), "mapping") {
            let mapping = Some(mapping);
            let framework = record.text_in(mapping, "frameworkName");
            block.push_str(&format!("- **{framework}**\n"));

            let term = record.markup_in(mapping, "correspondingTerm");
            if !term.is_empty() {
                let term = indent_continuation(&term, "    ");
                block.push_str(&format!("  - **Term:** {term}\n"));
            }

            if let Some(section) = record.find_in(mapping, "correspondingSection") {
                // Each child is its own fragment; they stack as paragraphs.
                let parts: Vec<String> = section
                    .children()
                    .iter()
                    .map(|part| convert(Some(part)))
                    .collect();
                let text = indent_continuation(&parts.join("\n\n"), "    ");
                block.push_str(&format!("  - **Section:** {text}\n"));
            }
        }

        block.push('\n');
        Some(block)
    }
}
