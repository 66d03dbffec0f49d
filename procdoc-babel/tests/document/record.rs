use crate::common::fixture;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use procdoc_babel::{convert_file, ConvertError, RenderOptions};

fn render_fixture(name: &str) -> String {
    convert_file(&fixture(name), &RenderOptions::default()).expect("fixture should render")
}

const STEPS_TABLE: &str = "\
| Step | Description                   | Inputs               | Outputs            |
| :--- | :---------------------------- | :------------------- | :----------------- |
| 1    | Compute the current checksum. | - Stored object      | - Current checksum |
| 2    | Compare both values.<br><br>Record the outcome. | - Current checksum<br>- Reference checksum |                    |";

#[test]
fn test_full_record() {
    let markdown = render_fixture("CPP-001.xml");

    let expected = [
        "# Fixity Check\n\n",
        "**Short Definition:** Verifies that stored objects are unchanged.\n\n",
        "## Description and Scope\n",
        "Fixity checks compare *checksums* against a **reference value**.\n\n",
        "See [the handbook](https://www.dpconline.org/handbook) for background.\n\n",
        "* Detects bit rot\n* Detects tampering\n\n",
        "## Authors\n- Jane Doe\n- John Roe\n\n",
        "## Contributors\n- Ada Lovelace\n\n",
        "## Process Definition\n\n",
        "**Inputs:**\n- Object checksum\n- Checking schedule\n\n",
        "**Outputs:**\n- Fixity event record\n\n",
        "**Trigger Events:**\n- Object *ingested* (see `CPP-002`)\n- Scheduled interval elapsed\n\n",
        "## Process Steps\n\n",
        STEPS_TABLE,
        "\n\n",
        "## Rationale / Worst Case\n\n",
        "| Purpose          | Worst Case                       |\n",
        "| :--------------- | :------------------------------- |\n",
        "| Ensure integrity | Silent corruption goes unnoticed |\n\n",
        "## Relationships\n\n",
        "| Type     | Related CPP | Description                    |\n",
        "| :------- | :---------- | :----------------------------- |\n",
        "| requires | CPP-002     | Needs a **reference** checksum |\n\n",
        "## Framework Mappings\n\n",
        "- **OAIS**\n",
        "  - **Term:** Fixity Information\n",
        "  - **Section:** 4.2.1.4.2\n\n    Preservation Description Information\n",
        "\n",
        "## Reference Implementations\n\n",
        "### Use Cases\n",
        "- **Nightly audit**\n",
        "  - **Institution:** Example Archive\n",
        "  - **Documentation:** <https://archive.example.org/audit>\n",
        "  - **Problem:** Thousands of files need checking.\n",
        "  - **Solution:**\n",
        "    ```python\n",
        "    import hashlib\n\n",
        "    def digest(path):\n",
        "        return hashlib.sha256(open(path, 'rb').read()).hexdigest()\n",
        "    ```\n",
        "\n",
        "### Public Documentation\n",
        "- **National Library**\n",
        "  - **Link:** [Fixity policy](https://library.example.org/fixity)\n",
        "  - **Comment:** Published 2021\n",
        "\n",
    ]
    .concat();

    assert_eq!(markdown, expected);
}

#[test]
fn test_sparse_record() {
    let markdown = render_fixture("CPP-002.xml");
    assert_eq!(
        markdown,
        "# No Label Found\n\n## Description and Scope\nA record with unfamiliar *markup* only.\n\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(render_fixture("CPP-001.xml"), render_fixture("CPP-001.xml"));
}

#[test]
fn test_malformed_record_is_an_error() {
    let err = convert_file(&fixture("broken.xml"), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Xml { .. }), "got {err:?}");
    assert!(err.to_string().contains("broken.xml"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = convert_file(&fixture("absent.xml"), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }), "got {err:?}");
}

#[test]
fn test_record_parses_as_markdown() {
    let markdown = render_fixture("CPP-001.xml");

    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    let root = parse_document(&arena, &markdown, &options);

    let mut headings = 0;
    let mut table_columns = Vec::new();
    let mut code_blocks = Vec::new();
    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Heading(_) => headings += 1,
            NodeValue::Table(table) => table_columns.push(table.num_columns),
            NodeValue::CodeBlock(block) => code_blocks.push(block.info.clone()),
            _ => {}
        }
    }

    // title, description, authors, contributors, process, steps, rationale,
    // relationships, mappings, references, use cases, public documentation
    assert_eq!(headings, 12);
    assert_eq!(table_columns, vec![4, 2, 3]);
    assert_eq!(code_blocks, vec!["python".to_string()]);
}
