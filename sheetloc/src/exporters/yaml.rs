//! YAML exporter, the format the original message-lookup consumers read.
//!
//! Serialization goes straight through the tree's order-preserving
//! `Serialize` impl, so output keys appear in first-seen row order.

use crate::{
    error::Error,
    exporters::{ExportContext, Exporter, Format},
    tree::TranslationTree,
};

pub struct YamlExporter;

impl Exporter for YamlExporter {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn serialize(&self, tree: &TranslationTree, _ctx: &ExportContext) -> Result<Vec<u8>, Error> {
        let rendered = serde_yaml::to_string(tree)?;
        Ok(rendered.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::tests::sample_tree;
    use crate::locale::Locale;
    use indoc::indoc;

    #[test]
    fn test_yaml_output_preserves_order() {
        let locale: Locale = "en_GB".parse().unwrap();
        let ctx = ExportContext {
            sheet: "common",
            locale: &locale,
            default_locale: "en",
            separator: ".",
        };
        let bytes = YamlExporter.serialize(&sample_tree(), &ctx).unwrap();
        let rendered = String::from_utf8(bytes).unwrap();
        assert_eq!(
            rendered,
            indoc! {"
                homepage:
                  title: Hello
                  subtitle: World
                footer: Bye
            "}
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let locale: Locale = "en".parse().unwrap();
        let ctx = ExportContext {
            sheet: "common",
            locale: &locale,
            default_locale: "en",
            separator: ".",
        };
        let tree = sample_tree();
        let bytes = YamlExporter.serialize(&tree, &ctx).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_slice(&bytes).unwrap();
        assert_eq!(value["homepage"]["title"], "Hello");
        assert_eq!(value["homepage"]["subtitle"], "World");
        assert_eq!(value["footer"], "Bye");
    }
}
