use crate::parse_executable_document;
use crate::GraphQLErrorNoteKind;

#[test]
fn detailed_format_includes_snippet_and_notes() {
    let source = "query {\n  user(id 5)\n}";
    let error = parse_executable_document(source).unwrap_err();
    let detailed = error.format_detailed(Some(source));
    let expected = [
        "error: expected `:`, found `5`".to_string(),
        "  --> 2:11".to_string(),
        "   |".to_string(),
        " 2 |   user(id 5)".to_string(),
        format!("   | {}^", " ".repeat(10)),
    ];
    assert_eq!(detailed, format!("{}\n", expected.join("\n")));
}

#[test]
fn detailed_format_without_source() {
    let mut error = parse_executable_document("{ a {} }").unwrap_err();
    error.add_note("extra context");
    let detailed = error.format_detailed(None);
    assert!(detailed.starts_with("error: selection set cannot be empty\n  --> 1:5\n"));
    assert!(detailed.contains("   = help: select at least one field"));
    assert!(detailed.ends_with("   = note: extra context\n"));
    assert_eq!(error.notes().last().unwrap().kind, GraphQLErrorNoteKind::General);
}
