use super::{Record, Section};
use crate::table::{format_table, TableRecord};
use crate::text::to_cell_text;

/// Purpose / worst case pairs
pub struct RationaleSection;

const RATIONALE_HEADERS: [&str; 2] = ["Purpose", "Worst Case"];

impl Section for RationaleSection {
    fn name(&self) -> &str {
        "rationale"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let rationale = record.container("rationaleWorstCase")?;
        let rows: Vec<TableRecord> = record
            .find_all_in(Some(rationale), "purpose")
            .into_iter()
            .map(|purpose| {
                let purpose = Some(purpose);
                TableRecord::new()
                    .with(
                        "Purpose",
                        to_cell_text(&record.markup_in(purpose, "purposeDescription")),
                    )
                    .with(
                        "Worst Case",
                        to_cell_text(&record.markup_in(purpose, "worstCase")),
                    )
            })
            .collect();

        titled_table("## Rationale / Worst Case", &RATIONALE_HEADERS, &rows)
    }
}

/// Links to other process patterns
pub struct RelationshipsSection;

const RELATIONSHIP_HEADERS: [&str; 3] = ["Type", "Related CPP", "Description"];

impl Section for RelationshipsSection {
    fn name(&self) -> &str {
        "relationships"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let relationships = record.container("cppRelationships")?;
        let rows: Vec<TableRecord> = record
            .find_all_in(Some(relationships), "relationship")
            .into_iter()
            .map(|relationship| {
                let relationship = Some(relationship);
                TableRecord::new()
                    .with("Type", record.text_in(relationship, "relationshipType"))
                    .with("Related CPP", record.text_in(relationship, "relatedCPP"))
                    .with(
                        "Description",
                        to_cell_text(&record.markup_in(relationship, "relationshipDescription")),
                    )
            })
            .collect();

        titled_table("## Relationships", &RELATIONSHIP_HEADERS, &rows)
    }
}

/// A table under a heading, or nothing when there are no rows.
fn titled_table(heading: &str, headers: &[&str], rows: &[TableRecord]) -> Option<String> {
    let table = format_table(headers, rows);
    if table.is_empty() {
        log::debug!("'{heading}' has no rows, skipping");
        return None;
    }
    Some(format!("{heading}\n\n{table}\n\n"))
}
