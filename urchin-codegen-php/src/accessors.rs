//! The accessor functions shared by both helper styles.

use urchin_core::to_camel_case;
use urchin_manifest::ParsedManifest;

use crate::ast::{Function, Param, PhpValue, Visibility, quote};

/// How accessors are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessorKind {
    /// Free `snake_case` functions.
    Function,
    /// `final public static` methods in `camelCase`.
    StaticMethod,
}

impl AccessorKind {
    fn name(self, snake: &str) -> String {
        match self {
            Self::Function => snake.to_string(),
            Self::StaticMethod => to_camel_case(snake),
        }
    }

    /// What the docs call the generated file.
    fn noun(self) -> &'static str {
        match self {
            Self::Function => "helper",
            Self::StaticMethod => "class",
        }
    }

    /// Expression calling a sibling accessor.
    fn call(self, snake: &str) -> String {
        match self {
            Self::Function => format!("{snake}()"),
            Self::StaticMethod => format!("self::{}()", to_camel_case(snake)),
        }
    }

    fn declare(self, snake: &str) -> Function {
        let function = Function::new(self.name(snake));
        match self {
            Self::Function => function,
            Self::StaticMethod => function
                .final_()
                .visibility(Visibility::Public)
                .static_(),
        }
    }
}

/// Build the six accessors exposing `parsed`, in output order.
///
/// `generated_at` is embedded verbatim into the `DateTimeImmutable`
/// constructor.
pub(crate) fn accessors(
    parsed: &ParsedManifest,
    generated_at: &str,
    kind: AccessorKind,
) -> Vec<Function> {
    let assets = PhpValue::string_map(
        parsed
            .assets()
            .iter()
            .map(|(name, uri)| (name.as_str(), uri.as_str())),
    );

    vec![
        kind.declare("get_generated_date")
            .doc(format!(
                "Returns the date that this {} was generated\n\n@return DateTimeImmutable",
                kind.noun()
            ))
            .returns("DateTimeImmutable")
            .body_line(format!(
                "return new DateTimeImmutable({});",
                quote(generated_at)
            )),
        kind.declare("get_preload_assets")
            .doc("Returns an array of public asset paths that should be preloaded\n\n@return string[]")
            .returns("array")
            .body_fragments(list(parsed.preload()).fragments("return ", ";")),
        kind.declare("get_versioned_assets")
            .doc("Returns an array of all public asset paths\n\n@return array<string, string>")
            .returns("array")
            .body_fragments(assets.fragments("return ", ";")),
        kind.declare("get_versioned_asset")
            .doc(
                "Returns the public asset path of a file by its original name\n\n\
                 @param string $original_name\n\n\
                 @return string|null",
            )
            .param(Param::new("original_name", "string"))
            .returns("?string")
            .body_line(format!(
                "return {}[$original_name] ?? null;",
                kind.call("get_versioned_assets")
            )),
        kind.declare("get_js_entries")
            .doc("Returns an array of public asset paths that should be used as JavaScript entries\n\n@return string[]")
            .returns("array")
            .body_fragments(list(parsed.js_entries()).fragments("return ", ";")),
        kind.declare("get_css_entries")
            .doc("Returns an array of public asset paths that should be used as CSS entries\n\n@return string[]")
            .returns("array")
            .body_fragments(list(parsed.css_entries()).fragments("return ", ";")),
    ]
}

fn list(items: &[String]) -> PhpValue {
    PhpValue::string_list(items.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use urchin_manifest::Manifest;

    use super::*;

    const TS: &str = "2024-05-01T12:00:00+00:00";

    fn parsed() -> ParsedManifest {
        Manifest::from_str(
            r#"{
              "main.js": {"file": "main.abc123.js", "isEntry": true, "css": ["main.def456.css"], "dynamicImports": ["lazy.js"]},
              "lazy.js": {"file": "lazy.ghi789.js", "src": "lazy.js"}
            }"#,
        )
        .unwrap()
        .parse()
        .unwrap()
    }

    fn names(kind: AccessorKind) -> Vec<String> {
        accessors(&ParsedManifest::default(), TS, kind)
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }

    #[test]
    fn test_function_names() {
        assert_eq!(
            names(AccessorKind::Function),
            [
                "get_generated_date",
                "get_preload_assets",
                "get_versioned_assets",
                "get_versioned_asset",
                "get_js_entries",
                "get_css_entries",
            ]
        );
    }

    #[test]
    fn test_method_names() {
        assert_eq!(
            names(AccessorKind::StaticMethod),
            [
                "getGeneratedDate",
                "getPreloadAssets",
                "getVersionedAssets",
                "getVersionedAsset",
                "getJsEntries",
                "getCssEntries",
            ]
        );
    }

    #[test]
    fn test_lookup_function() {
        let lookup = &accessors(&parsed(), TS, AccessorKind::Function)[3];
        assert_eq!(
            lookup.build(),
            "/**\n * Returns the public asset path of a file by its original name\n *\n * @param string $original_name\n *\n * @return string|null\n */\nfunction get_versioned_asset(string $original_name): ?string\n{\n    return get_versioned_assets()[$original_name] ?? null;\n}\n"
        );
    }

    #[test]
    fn test_lookup_method_calls_self() {
        let lookup = &accessors(&parsed(), TS, AccessorKind::StaticMethod)[3];
        let code = lookup.build();
        assert!(code.contains(
            "final public static function getVersionedAsset(string $original_name): ?string\n"
        ));
        assert!(code.contains("return self::getVersionedAssets()[$original_name] ?? null;"));
    }

    #[test]
    fn test_generated_date_mentions_style() {
        let function = &accessors(&parsed(), TS, AccessorKind::Function)[0];
        let method = &accessors(&parsed(), TS, AccessorKind::StaticMethod)[0];

        assert!(function.build().contains("this helper was generated"));
        assert!(method.build().contains("this class was generated"));
        assert!(
            method
                .build()
                .contains("return new DateTimeImmutable('2024-05-01T12:00:00+00:00');")
        );
    }

    #[test]
    fn test_empty_collections_render_empty_arrays() {
        let functions = accessors(&ParsedManifest::default(), TS, AccessorKind::Function);
        for function in &functions[1..] {
            if function.name() != "get_versioned_asset" {
                assert!(function.build().contains("    return [];\n"));
            }
        }
    }

    #[test]
    fn test_versioned_assets_body() {
        let assets = &accessors(&parsed(), TS, AccessorKind::Function)[2];
        assert!(
            assets
                .build()
                .contains("    return [\n        'lazy.js' => '/assets/lazy.ghi789.js',\n    ];\n")
        );
    }
}
