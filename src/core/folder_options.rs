//! Folder Options Layer
//!
//! Resolves a component folder's config file and turns its export into
//! [`FolderOptions`]. Failures are tagged with the role they happened in.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{OptionExt, ReadmeError, Result, RoleContext};
use crate::models::config::Settings;
use crate::models::extraction::Role;
use crate::models::folder::{EntryOptions, FolderMeta, FolderOptions, GlobalOptions, PropsEntry};
use crate::models::language::LanguageReadResult;
use crate::parsers::SnippetExtractor;
use crate::utils::language::{read_language, require_language};

/// Loads per-folder and root-level options
pub struct FolderOptionsLoader {
    extractor: SnippetExtractor,
    config_name: String,
    js_only: bool,
}

impl FolderOptionsLoader {
    pub fn new(config_name: impl Into<String>, js_only: bool) -> Self {
        Self {
            extractor: SnippetExtractor::new(),
            config_name: config_name.into(),
            js_only,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.config_name.clone(), settings.js_only)
    }

    /// Load `<folder>/<config_name>.{ts,tsx,js}`
    pub fn load(&self, folder: &Path) -> Result<FolderOptions> {
        let found = require_language(&folder.join(&self.config_name), self.js_only)?;
        tracing::debug!(folder = %folder.display(), path = %found.read_path.display(), "loading component config");

        let LanguageReadResult {
            code,
            language,
            read_path,
        } = &found;
        let language = *language;

        // Parse and export failures surface under the first role read
        let extracted = self
            .extractor
            .extract_config(read_path, code, language)
            .with_role(Role::Component, read_path)?;

        let component = extracted
            .component
            .ok_or_error(|| ReadmeError::missing_member(Role::Component, read_path))?;

        let raw_entries = extracted.props.unwrap_or_default();
        let mut props = Vec::with_capacity(raw_entries.len());
        for (index, raw) in raw_entries.into_iter().enumerate() {
            let code = raw
                .code
                .ok_or_error(|| ReadmeError::missing_member(Role::Props, read_path))?;
            let options: EntryOptions = deserialize_options(raw.options, Role::Props, read_path)?.unwrap_or_default();
            props.push(PropsEntry {
                index,
                code,
                readme_code: raw.readme_code,
                options,
            });
        }

        let meta: FolderMeta = deserialize_options(Some(extracted.config), Role::Config, read_path)?.unwrap_or_default();

        let name = folder
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| folder.display().to_string());

        Ok(FolderOptions {
            name,
            folder: folder.to_path_buf(),
            config_path: read_path.clone(),
            language,
            component,
            props,
            meta,
        })
    }

    /// Load `<root>/<config_name>.{ts,tsx,js}` when it exists
    pub fn load_global(&self, root: &Path) -> Result<Option<GlobalOptions>> {
        let Some(found) = read_language(&root.join(&self.config_name), self.js_only)? else {
            return Ok(None);
        };

        let value = self
            .extractor
            .extract_static_config(&found.read_path, &found.code, found.language)
            .with_role(Role::Config, &found.read_path)?;

        Ok(Some(
            deserialize_options(value, Role::Config, &found.read_path)?.unwrap_or_default(),
        ))
    }
}

fn deserialize_options<T: DeserializeOwned>(
    value: Option<serde_json::Value>,
    role: Role,
    path: &Path,
) -> Result<Option<T>> {
    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(|source| ReadmeError::InvalidOptions {
            role,
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::extraction::ComponentSource;
    use crate::models::language::Language;
    use std::fs;
    use tempfile::TempDir;

    fn folder_with(name: &str, file: &str, code: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join(name);
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join(file), code).unwrap();
        (dir, folder)
    }

    #[test]
    fn test_load_full_folder() {
        let (_dir, folder) = folder_with(
            "button",
            "readme.tsx",
            "const Button = ({ label }) => <button>{label}</button>;\n\
             export default {\n  title: 'Buttons',\n  component: Button,\n  \
             props: [{ label: 'A' }, [{ label: 'B' }, { alt: 'Second', props: { label: '…' } }]],\n};",
        );

        let options = FolderOptionsLoader::new("readme", false).load(&folder).unwrap();

        assert_eq!(options.name, "button");
        assert_eq!(options.language, Language::Tsx);
        assert_eq!(options.title(), "Buttons");
        assert_eq!(options.component.code, "({ label }) => <button>{label}</button>");
        assert_eq!(options.component.source, ComponentSource::Declaration);
        assert_eq!(options.props.len(), 2);
        assert_eq!(options.props[0].code, "{ label: 'A' }");
        assert_eq!(options.props[1].display_code(), "{ label: '…' }");
        assert_eq!(options.props[1].options.alt.as_deref(), Some("Second"));
    }

    #[test]
    fn test_named_method_component_with_meta() {
        let (_dir, folder) = folder_with(
            "icon",
            "readme.js",
            "module.exports = {\n  title: 'Icon',\n  Icon() { return null; },\n  props: { size: 16 },\n};",
        );

        let options = FolderOptionsLoader::new("readme", false).load(&folder).unwrap();

        assert_eq!(options.component.code, "Icon() { return null; }");
        assert_eq!(options.component.source, ComponentSource::Method);
        assert_eq!(options.title(), "Icon");
        assert_eq!(options.props.len(), 1);
        assert_eq!(options.props[0].code, "{ size: 16 }");
    }

    #[test]
    fn test_missing_component_is_fatal() {
        let (_dir, folder) = folder_with("card", "readme.js", "module.exports = { props: {} };");
        let err = FolderOptionsLoader::new("readme", false).load(&folder).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("could not parse component in {}", folder.join("readme.js").display())
        );
    }

    #[test]
    fn test_props_hole_is_fatal() {
        let (_dir, folder) = folder_with(
            "card",
            "readme.js",
            "module.exports = { component: () => null, props: [{ a: 1 }, missing] };",
        );
        let err = FolderOptionsLoader::new("readme", false).load(&folder).unwrap_err();
        assert!(matches!(err, ReadmeError::MissingMember { role: Role::Props, .. }));
    }

    #[test]
    fn test_ambiguous_export_reported_with_role() {
        let (_dir, folder) = folder_with(
            "card",
            "readme.js",
            "module.exports = { component: () => 1 };\nmodule.exports = { component: () => 2 };",
        );
        let err = FolderOptionsLoader::new("readme", false).load(&folder).unwrap_err();
        let path = folder.join("readme.js");
        assert_eq!(
            err.to_string(),
            format!(
                "error parsing component in {}\nno definitive export in {} (2 candidates)",
                path.display(),
                path.display()
            )
        );
    }

    #[test]
    fn test_no_props_is_allowed() {
        let (_dir, folder) = folder_with("icon", "readme.ts", "export = { component: class {} };");
        let options = FolderOptionsLoader::new("readme", false).load(&folder).unwrap();
        assert!(options.props.is_empty());
        assert_eq!(options.title(), "icon");
    }

    #[test]
    fn test_invalid_meta_type() {
        let (_dir, folder) = folder_with(
            "icon",
            "readme.ts",
            "export = { component: class {}, title: 42 };",
        );
        let err = FolderOptionsLoader::new("readme", false).load(&folder).unwrap_err();
        assert!(matches!(err, ReadmeError::InvalidOptions { role: Role::Config, .. }));
    }

    #[test]
    fn test_global_options() {
        let dir = TempDir::new().unwrap();
        let loader = FolderOptionsLoader::new("readme", false);
        assert_eq!(loader.load_global(dir.path()).unwrap(), None);

        fs::write(
            dir.path().join("readme.js"),
            "module.exports = { title: 'Kit', description: `All components` };",
        )
        .unwrap();
        let global = loader.load_global(dir.path()).unwrap().unwrap();
        assert_eq!(global.title.as_deref(), Some("Kit"));
        assert_eq!(global.description.as_deref(), Some("All components"));
    }
}
