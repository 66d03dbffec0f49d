use super::{bullet_block, Record, Section};
use crate::markup::{convert, simple_text, MarkupNode};
use crate::table::{format_table, TableRecord};
use crate::text::{to_cell_text, CELL_LINE_BREAK};

/// Inputs, outputs and trigger events of the process
pub struct ProcessSection;

impl Section for ProcessSection {
    fn name(&self) -> &str {
        "process"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let process = record.container("process")?;
        let process = Some(process);
        let mut block = String::from("## Process Definition\n\n");

        let plain = |paths: &[&str]| -> Vec<String> {
            paths
                .iter()
                .flat_map(|path| record.find_all_in(process, path))
                .map(|item| simple_text(Some(item)))
                .collect()
        };

        let inputs = plain(&["inputs/data/dataElement", "inputs/guidance/guidanceElement"]);
        if let Some(list) = bullet_block("**Inputs:**", &inputs) {
            block.push_str(&list);
        }

        let outputs = plain(&[
            "outputs/metadata/metadataElement",
            "outputs/guidance/guidanceElement",
        ]);
        if let Some(list) = bullet_block("**Outputs:**", &outputs) {
            block.push_str(&list);
        }

        let triggers: Vec<String> = record
            .find_all_in(process, "triggerEvents/triggerEvent")
            .into_iter()
            .map(|trigger| {
                let description = record.markup_in(Some(trigger), "description");
                let related = record.text_in(Some(trigger), "correspondingCPP");
                if related.is_empty() {
                    description
                } else {
                    format!("{description} (see `{related}`)")
                }
            })
            .collect();
        if let Some(list) = bullet_block("**Trigger Events:**", &triggers) {
            block.push_str(&list);
        }

        Some(block)
    }
}

/// Table of every step below the process element, at any depth
pub struct StepsSection;

const STEP_HEADERS: [&str; 4] = ["Step", "Description", "Inputs", "Outputs"];

impl Section for StepsSection {
    fn name(&self) -> &str {
        "steps"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let process = record.container("process");
        let steps = record.scope().descendants(process, "step");

        let rows: Vec<TableRecord> = steps
            .into_iter()
            .map(|step| {
                let step = Some(step);
                TableRecord::new()
                    .with(
                        "Step",
                        step.and_then(|s| s.attribute("stepNumber")).unwrap_or(""),
                    )
                    .with(
                        "Description",
                        to_cell_text(&record.markup_in(step, "stepDescription")),
                    )
                    .with(
                        "Inputs",
                        to_cell_text(&item_lines(record, step, "input/inputElement")),
                    )
                    .with(
                        "Outputs",
                        to_cell_text(&item_lines(record, step, "output/outputElement")),
                    )
            })
            .collect();

        let table = format_table(&STEP_HEADERS, &rows);
        (!table.is_empty()).then(|| format!("## Process Steps\n\n{table}\n\n"))
    }
}

/// Converted items as `- item` lines joined by cell line breaks
fn item_lines<'a>(record: &Record<'a>, step: Option<&'a MarkupNode>, path: &str) -> String {
    record
        .find_all_in(step, path)
        .into_iter()
        .map(|item| convert(Some(item)))
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join(CELL_LINE_BREAK)
}
