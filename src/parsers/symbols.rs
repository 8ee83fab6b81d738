//! Declaration lookup for one parsed file
//!
//! Identifiers found in an export literal are followed back to the
//! top-level statement that declares them. Only the module scope is
//! indexed; the export literal itself lives there.

use oxc_ast::ast::*;
use oxc_span::Span;
use std::collections::HashMap;

/// What kind of statement introduced a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Variable,
    Function,
    Class,
    Import,
}

/// A top-level binding
#[derive(Debug, Clone, Copy)]
pub struct Binding<'s, 'a> {
    pub kind: BindingKind,
    /// Span of the binding identifier
    pub span: Span,
    /// Initializer of a variable declarator
    pub init: Option<&'s Expression<'a>>,
    /// Module specifier of an import binding
    pub import_source: Option<&'s str>,
}

/// Outcome of resolving a name one hop
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'s, 'a> {
    /// A variable declared with an initializer
    Initializer(&'s Expression<'a>),
    /// Declared, but there is no initializer to read
    NoInitializer(Binding<'s, 'a>),
    /// No top-level declaration with that name
    Undeclared,
}

impl<'s, 'a> Lookup<'s, 'a> {
    pub fn initializer(self) -> Option<&'s Expression<'a>> {
        match self {
            Lookup::Initializer(init) => Some(init),
            _ => None,
        }
    }
}

/// Name to declaration map built once per file
#[derive(Debug, Default)]
pub struct DeclarationTable<'s, 'a> {
    declarations: HashMap<&'s str, Binding<'s, 'a>>,
}

impl<'s, 'a> DeclarationTable<'s, 'a> {
    /// Index every top-level binding of `program`
    pub fn build(program: &'s Program<'a>) -> Self {
        let mut table = Self {
            declarations: HashMap::new(),
        };

        for stmt in &program.body {
            match stmt {
                Statement::VariableDeclaration(decl) => table.add_variables(decl),
                Statement::FunctionDeclaration(func) => table.add_function(func),
                Statement::ClassDeclaration(class) => table.add_class(class),
                Statement::ImportDeclaration(decl) => table.add_import(decl),
                Statement::ExportNamedDeclaration(decl) => match &decl.declaration {
                    Some(Declaration::VariableDeclaration(var_decl)) => table.add_variables(var_decl),
                    Some(Declaration::FunctionDeclaration(func)) => table.add_function(func),
                    Some(Declaration::ClassDeclaration(class)) => table.add_class(class),
                    _ => {}
                },
                _ => {}
            }
        }

        table
    }

    /// Resolve `name` to its declaration
    pub fn lookup(&self, name: &str) -> Lookup<'s, 'a> {
        match self.declarations.get(name) {
            Some(Binding {
                kind: BindingKind::Variable,
                init: Some(init),
                ..
            }) => Lookup::Initializer(*init),
            Some(decl) => Lookup::NoInitializer(*decl),
            None => Lookup::Undeclared,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding<'s, 'a>> {
        self.declarations.get(name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn insert(&mut self, name: &'s str, declaration: Binding<'s, 'a>) {
        // `var` may be redeclared; the first binding is the one kept
        self.declarations.entry(name).or_insert(declaration);
    }

    fn add_variables(&mut self, decl: &'s VariableDeclaration<'a>) {
        for declarator in &decl.declarations {
            if let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind {
                self.insert(
                    id.name.as_str(),
                    Binding {
                        kind: BindingKind::Variable,
                        span: id.span,
                        init: declarator.init.as_ref(),
                        import_source: None,
                    },
                );
            }
        }
    }

    fn add_function(&mut self, func: &'s Function<'a>) {
        if let Some(id) = &func.id {
            self.insert(
                id.name.as_str(),
                Binding {
                    kind: BindingKind::Function,
                    span: id.span,
                    init: None,
                    import_source: None,
                },
            );
        }
    }

    fn add_class(&mut self, class: &'s Class<'a>) {
        if let Some(id) = &class.id {
            self.insert(
                id.name.as_str(),
                Binding {
                    kind: BindingKind::Class,
                    span: id.span,
                    init: None,
                    import_source: None,
                },
            );
        }
    }

    fn add_import(&mut self, decl: &'s ImportDeclaration<'a>) {
        let Some(specifiers) = &decl.specifiers else {
            return;
        };

        for specifier in specifiers {
            let local = match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(spec) => &spec.local,
                ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => &spec.local,
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => &spec.local,
            };
            self.insert(
                local.name.as_str(),
                Binding {
                    kind: BindingKind::Import,
                    span: local.span,
                    init: None,
                    import_source: Some(decl.source.value.as_str()),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::language::Language;
    use crate::parsers::ast_parser::SourceParser;
    use std::path::Path;

    fn with_table<T>(source: &str, f: impl for<'s, 'a> FnOnce(&DeclarationTable<'s, 'a>) -> T) -> T {
        SourceParser::new()
            .parse_with(Path::new("test.ts"), source, Language::Ts, |program| {
                let table = DeclarationTable::build(program);
                Ok(f(&table))
            })
            .unwrap()
    }

    #[test]
    fn test_variable_with_initializer() {
        with_table("const props = { a: 1 };", |table| {
            assert!(matches!(table.lookup("props"), Lookup::Initializer(Expression::ObjectExpression(_))));
        });
    }

    #[test]
    fn test_declared_without_initializer_is_distinct_from_undeclared() {
        with_table(
            "let later;\nfunction Button() {}\nimport Card from './card';",
            |table| {
                assert!(matches!(
                    table.lookup("later"),
                    Lookup::NoInitializer(Binding { kind: BindingKind::Variable, .. })
                ));
                assert!(matches!(
                    table.lookup("Button"),
                    Lookup::NoInitializer(Binding { kind: BindingKind::Function, .. })
                ));
                match table.lookup("Card") {
                    Lookup::NoInitializer(decl) => {
                        assert_eq!(decl.kind, BindingKind::Import);
                        assert_eq!(decl.import_source, Some("./card"));
                    }
                    other => panic!("Expected import declaration, got {:?}", other),
                }
                assert!(matches!(table.lookup("missing"), Lookup::Undeclared));
            },
        );
    }

    #[test]
    fn test_exported_declarations_are_indexed() {
        with_table("export const items = [];\nexport class Widget {}", |table| {
            assert!(table.lookup("items").initializer().is_some());
            assert_eq!(table.get("Widget").map(|d| d.kind), Some(BindingKind::Class));
            assert_eq!(table.len(), 2);
        });
    }

    #[test]
    fn test_first_declaration_wins() {
        with_table("var a = { first: 1 };\nvar a = { second: 2 };", |table| {
            let init = table.lookup("a").initializer().unwrap();
            match init {
                Expression::ObjectExpression(obj) => assert_eq!(obj.span.start, 8),
                other => panic!("Expected object, got {:?}", other),
            }
        });
    }
}
