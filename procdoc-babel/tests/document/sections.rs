use crate::common::record;
use procdoc_babel::sections::{
    RationaleSection, Record, ReferencesSection, Section, StepsSection, TitleSection,
};
use procdoc_babel::{render_document, MarkupNode, RenderOptions, SectionRegistry};

fn render_one(section: &dyn Section, root: &MarkupNode) -> Option<String> {
    let options = RenderOptions::default();
    section.render(&Record::new(root, &options))
}

#[test]
fn test_title_uses_configured_placeholder() {
    let root = record("<cpp:header/>");
    let options = RenderOptions {
        missing_label: "Untitled".to_string(),
        ..RenderOptions::default()
    };
    assert_eq!(
        TitleSection.render(&Record::new(&root, &options)).as_deref(),
        Some("# Untitled\n\n")
    );
}

#[test]
fn test_empty_container_is_skipped() {
    let root = record("<cpp:rationaleWorstCase>\n  </cpp:rationaleWorstCase>");
    assert_eq!(render_one(&RationaleSection, &root), None);
}

#[test]
fn test_nested_steps_are_collected() {
    let root = record(
        r#"<cpp:process>
             <cpp:steps>
               <cpp:step stepNumber="1"><cpp:stepDescription>Top</cpp:stepDescription></cpp:step>
               <cpp:stepGroup>
                 <cpp:step stepNumber="1.1"><cpp:stepDescription>Nested</cpp:stepDescription></cpp:step>
               </cpp:stepGroup>
             </cpp:steps>
           </cpp:process>"#,
    );
    let block = render_one(&StepsSection, &root).expect("steps table");
    assert_eq!(
        block,
        "## Process Steps\n\n\
         | Step | Description | Inputs | Outputs |\n\
         | :--- | :---------- | :----- | :------ |\n\
         | 1    | Top         |        |         |\n\
         | 1.1  | Nested      |        |         |\n\n"
    );
}

#[test]
fn test_step_list_cell() {
    let root = record(
        r#"<cpp:process><cpp:step stepNumber="1">
             <cpp:stepDescription><cpp:ul><cpp:li>one</cpp:li><cpp:li>two</cpp:li></cpp:ul></cpp:stepDescription>
           </cpp:step></cpp:process>"#,
    );
    let block = render_one(&StepsSection, &root).expect("steps table");
    assert!(block.contains("| • one<br>• two |"), "{block}");
}

#[test]
fn test_pipes_in_cells_are_escaped() {
    let root = record(
        r#"<cpp:process><cpp:step stepNumber="1">
             <cpp:stepDescription>read | verify</cpp:stepDescription>
           </cpp:step></cpp:process>"#,
    );
    let block = render_one(&StepsSection, &root).expect("steps table");
    assert!(block.contains(r"| read \| verify |"), "{block}");
}

#[test]
fn test_use_case_without_solution() {
    let root = record(
        "<cpp:referenceImplementations><cpp:useCases><cpp:useCase>\
           <cpp:useCasetitle>Pilot</cpp:useCasetitle>\
           <cpp:institution><cpp:institutionLabel>Lab</cpp:institutionLabel></cpp:institution>\
           <cpp:proposedSolution>...</cpp:proposedSolution>\
         </cpp:useCase></cpp:useCases></cpp:referenceImplementations>",
    );
    assert_eq!(
        render_one(&ReferencesSection, &root).as_deref(),
        Some(
            "## Reference Implementations\n\n\
             ### Use Cases\n\
             - **Pilot**\n  - **Institution:** Lab\n\n"
        )
    );
}

#[test]
fn test_solution_language_is_configurable() {
    let root = record(
        "<cpp:referenceImplementations><cpp:useCases><cpp:useCase>\
           <cpp:useCasetitle>Pilot</cpp:useCasetitle>\
           <cpp:proposedSolution>sha256sum -c SUMS</cpp:proposedSolution>\
         </cpp:useCase></cpp:useCases></cpp:referenceImplementations>",
    );
    let options = RenderOptions {
        solution_language: "sh".to_string(),
        ..RenderOptions::default()
    };
    let block = ReferencesSection
        .render(&Record::new(&root, &options))
        .expect("references");
    assert!(block.contains("    ```sh\n    sha256sum -c SUMS\n    ```\n"), "{block}");
}

#[test]
fn test_custom_registry() {
    let root = record("<cpp:header><cpp:label>Only a title</cpp:label></cpp:header>");
    let mut registry = SectionRegistry::new();
    registry.register(TitleSection);
    assert_eq!(
        registry.render(&root, &RenderOptions::default()),
        "# Only a title\n\n"
    );
}

#[test]
fn test_other_namespace_is_rejected() {
    let root = procdoc_babel::markup::parse_markup(
        "<cpp><header><label>x</label></header></cpp>",
        std::path::Path::new("plain.xml"),
    )
    .expect("parses");
    assert!(render_document(&root, &RenderOptions::default()).is_err());

    let options = RenderOptions {
        namespace: String::new(),
        ..RenderOptions::default()
    };
    assert_eq!(
        render_document(&root, &options).expect("renders"),
        "# x\n\n"
    );
}
