//! Dialect probing from extension-less paths

use std::fs;

use component_readme::{read_language, require_language, Language};
use tempfile::tempdir;

#[test]
fn test_js_only_probes_single_path() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("readme");
    fs::write(dir.path().join("readme.ts"), "export = {};").unwrap();

    assert_eq!(read_language(&base, true).unwrap(), None);

    let err = require_language(&base, true).unwrap_err();
    assert_eq!(err.to_string(), format!("cannot find `{}.js`", base.display()));
}

#[test]
fn test_lowest_priority_dialect_resolves() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("readme");
    fs::write(dir.path().join("readme.js"), "module.exports = {};").unwrap();

    let found = read_language(&base, false).unwrap().unwrap();
    assert_eq!(found.language, Language::Js);
    assert_eq!(found.language.tag(), "js");
    assert_eq!(found.read_path, dir.path().join("readme.js"));
    assert_eq!(found.code, "module.exports = {};");
}

#[test]
fn test_typed_module_preferred_over_markup() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("readme");
    fs::write(dir.path().join("readme.tsx"), "export default {};").unwrap();
    fs::write(dir.path().join("readme.ts"), "export = {};").unwrap();

    let found = require_language(&base, false).unwrap();
    assert_eq!(found.language, Language::Ts);
    assert_eq!(found.code, "export = {};");
}

#[test]
fn test_not_found_lists_every_candidate() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("readme");

    let err = require_language(&base, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "cannot find one of `{b}.ts,{b}.tsx,{b}.js`",
            b = base.display()
        )
    );
}

#[test]
fn test_directory_with_candidate_name_is_skipped() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("readme");
    fs::create_dir(dir.path().join("readme.ts")).unwrap();
    fs::write(dir.path().join("readme.tsx"), "export default {};").unwrap();

    assert_eq!(read_language(&base, false).unwrap().unwrap().language, Language::Tsx);
}
