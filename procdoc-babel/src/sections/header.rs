use super::{bullet_block, Record, Section};
use crate::markup::simple_text;

/// `# label`, falling back to the configured placeholder
pub struct TitleSection;

impl Section for TitleSection {
    fn name(&self) -> &str {
        "title"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let header = record.find("header");
        let label = record.text_in(header, "label");
        let label = if label.is_empty() {
            log::warn!("Record has no label");
            record.options().missing_label.as_str()
        } else {
            label.as_str()
        };
        Some(format!("# {label}\n\n"))
    }
}

pub struct ShortDefinitionSection;

impl Section for ShortDefinitionSection {
    fn name(&self) -> &str {
        "short-definition"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let definition = simple_text(record.find("shortDefinition"));
        (!definition.is_empty()).then(|| format!("**Short Definition:** {definition}\n\n"))
    }
}

pub struct DescriptionSection;

impl Section for DescriptionSection {
    fn name(&self) -> &str {
        "description"
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let description = record.markup_in(Some(record.root()), "descriptionAndScope");
        (!description.is_empty())
            .then(|| format!("## Description and Scope\n{description}\n\n"))
    }
}

/// Bullet list of people from the record header
pub struct PeopleSection {
    name: &'static str,
    heading: &'static str,
    path: &'static str,
}

impl PeopleSection {
    pub fn authors() -> Self {
        PeopleSection {
            name: "authors",
            heading: "## Authors",
            path: "authors/author",
        }
    }

    pub fn contributors() -> Self {
        PeopleSection {
            name: "contributors",
            heading: "## Contributors",
            path: "contributors/contributor",
        }
    }

    pub fn evaluators() -> Self {
        PeopleSection {
            name: "evaluators",
            heading: "## Evaluators",
            path: "evaluators/evaluator",
        }
    }
}

impl Section for PeopleSection {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, record: &Record<'_>) -> Option<String> {
        let header = record.find("header");
        let people: Vec<String> = record
            .find_all_in(header, self.path)
            .into_iter()
            .map(|person| simple_text(Some(person)))
            .collect();
        bullet_block(self.heading, &people)
    }
}
