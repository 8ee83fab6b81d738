//! Static extraction through the public extractor API

use std::path::Path;

use component_readme::{
    models::extraction::ComponentSource, Language, PropsText, ReadmeError, SnippetExtractor,
};

fn component(code: &str, language: Language) -> Option<String> {
    SnippetExtractor::new()
        .extract_component(Path::new("readme"), code, language)
        .unwrap()
        .map(|snippet| snippet.code)
}

fn props(code: &str, sub_property: Option<&str>) -> Option<PropsText> {
    SnippetExtractor::new()
        .extract_props(Path::new("readme.js"), code, Language::Js, sub_property)
        .unwrap()
}

fn list(items: &[Option<&str>]) -> PropsText {
    PropsText::List(items.iter().map(|item| item.map(str::to_string)).collect())
}

#[test]
fn test_inline_shapes_are_byte_identical() {
    let shapes = [
        "function Demo(props) {\n  // keeps comments\n  return props.children;\n}",
        "(props) => {\n    /* block */ return   props;\n}",
        "class extends Base {\n  render() { return null; }\n}",
        "function* () { yield   load(); }",
    ];

    for shape in shapes {
        let code = format!("module.exports = {{\n  component: {},\n}};", shape);
        assert_eq!(component(&code, Language::Js).as_deref(), Some(shape), "{}", shape);
    }
}

#[test]
fn test_method_form_captures_whole_member() {
    let code = "export default {\n  component() {\n    return <Demo />;\n  },\n};";
    let snippet = SnippetExtractor::new()
        .extract_component(Path::new("readme.tsx"), code, Language::Tsx)
        .unwrap()
        .unwrap();

    assert_eq!(snippet.code, "component() {\n    return <Demo />;\n  }");
    assert_eq!(snippet.source, ComponentSource::Method);
    assert_eq!((snippet.location.line, snippet.location.column), (2, 3));
}

#[test]
fn test_arbitrarily_named_method_is_component() {
    let code = "module.exports = { Button() { return 1; }, props: {a:1} };";
    assert_eq!(component(code, Language::Js).as_deref(), Some("Button() { return 1; }"));
    assert_eq!(props(code, None), Some(PropsText::Single(Some("{a:1}".to_string()))));

    let code = "export default {\n  Demo() { return <b />; },\n  component: () => <i />,\n};";
    assert_eq!(component(code, Language::Tsx).as_deref(), Some("Demo() { return <b />; }"));
}

#[test]
fn test_reference_matches_inline_text() {
    let inline = "module.exports = { component: (a) => a * 2 };";
    let by_name = "const double = (a) => a * 2;\nmodule.exports = { component: double };";
    let shorthand = "const component = (a) => a * 2;\nmodule.exports = { component };";

    let expected = component(inline, Language::Js);
    assert_eq!(expected.as_deref(), Some("(a) => a * 2"));
    assert_eq!(component(by_name, Language::Js), expected);
    assert_eq!(component(shorthand, Language::Js), expected);
}

#[test]
fn test_first_component_member_wins() {
    let code = "module.exports = { component: () => 'first', component: () => 'second' };";
    assert_eq!(component(code, Language::Js).as_deref(), Some("() => 'first'"));
}

#[test]
fn test_reference_to_non_component_is_not_found() {
    let code = "const value = 42;\nmodule.exports = { component: value };";
    assert_eq!(component(code, Language::Js), None);
}

#[test]
fn test_export_through_identifier() {
    let code = "const config = { component: () => null, props: { a: 1 } };\nexport default config;";
    assert_eq!(component(code, Language::Ts).as_deref(), Some("() => null"));
}

#[test]
fn test_export_style_follows_language() {
    let code = "module.exports = { component: () => null };";
    assert_eq!(component(code, Language::Js).as_deref(), Some("() => null"));

    // Typed dialects only recognise export statements
    let err = SnippetExtractor::new()
        .extract_component(Path::new("readme.ts"), code, Language::Ts)
        .unwrap_err();
    assert!(matches!(err, ReadmeError::AmbiguousExport { candidates: 0, .. }));
}

#[test]
fn test_single_object_props() {
    let code = "module.exports = { component: () => null, props:{prop1:1} };";
    assert_eq!(props(code, None), Some(PropsText::Single(Some("{prop1:1}".to_string()))));
}

#[test]
fn test_props_array_keeps_order() {
    let code = "module.exports = { component: () => null, props:[{prop1:1},{prop2:2}] };";
    assert_eq!(props(code, None), Some(list(&[Some("{prop1:1}"), Some("{prop2:2}")])));
}

#[test]
fn test_tuple_entries_drop_options_half() {
    let code = "module.exports = { component: function(){}, props:[{prop1:1},[{prop2:2},{option:'x'}]] };";
    assert_eq!(component(code, Language::Js).as_deref(), Some("function(){}"));
    assert_eq!(props(code, None), Some(list(&[Some("{prop1:1}"), Some("{prop2:2}")])));
}

#[test]
fn test_sub_property_selects_inner_object() {
    let code = "module.exports = { component: () => null, props:[[{a:1},{props:{a:'shown'}}]] };";
    assert_eq!(props(code, Some("props")), Some(list(&[Some("{a:'shown'}")])));
}

#[test]
fn test_one_hop_per_identifier() {
    let code = "const first = {a:1};\n\
                const items = [first, {b:2}];\n\
                module.exports = { component: () => null, props: items };";
    assert_eq!(props(code, None), Some(list(&[Some("{a:1}"), Some("{b:2}")])));
}

#[test]
fn test_double_indirection_is_not_followed() {
    let code = "const items = [{a:1}];\n\
                const alias = items;\n\
                module.exports = { component: () => null, props: alias };";
    assert_eq!(props(code, None), Some(PropsText::Single(None)));
}

#[test]
fn test_unresolvable_entries_leave_holes() {
    let code = "module.exports = { component: () => null, props: [{a:1}, imported, 'text'] };";
    assert_eq!(props(code, None), Some(list(&[Some("{a:1}"), None, None])));
}

#[test]
fn test_two_exports_are_ambiguous() {
    let code = "module.exports = { component: () => 1 };\nmodule.exports = { component: () => 2 };";
    let err = SnippetExtractor::new()
        .extract_component(Path::new("readme.js"), code, Language::Js)
        .unwrap_err();
    assert!(matches!(err, ReadmeError::AmbiguousExport { candidates: 2, .. }));
}

#[test]
fn test_props_entries_carry_options() {
    let code = "module.exports = {\n\
                  component: () => null,\n\
                  props: [[{ a: 1 }, { alt: 'First', props: { a: '…' }, screenshot: { width: 300 } }]],\n\
                };";
    let entries = SnippetExtractor::new()
        .extract_props_entries(Path::new("readme.js"), code, Language::Js)
        .unwrap()
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code.as_deref(), Some("{ a: 1 }"));
    assert_eq!(entries[0].readme_code.as_deref(), Some("{ a: '…' }"));
    let options = entries[0].options.as_ref().unwrap();
    assert_eq!(options["alt"], "First");
    assert_eq!(options["screenshot"]["width"], 300);
}
