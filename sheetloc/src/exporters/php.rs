//! PHP exporter: a `return [...]` associative-array literal, consumable by
//! PHP frameworks that load translation catalogues as plain array files.

use crate::{
    error::Error,
    exporters::{ExportContext, Exporter, Format},
    tree::{Node, TranslationTree},
};

pub struct PhpExporter;

const INDENT: &str = "    ";

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn render_tree(tree: &TranslationTree, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    for (key, node) in tree.entries() {
        match node {
            Node::Leaf(value) => {
                out.push_str(&format!("{indent}'{}' => '{}',\n", escape(key), escape(value)));
            }
            Node::Branch(subtree) => {
                out.push_str(&format!("{indent}'{}' => [\n", escape(key)));
                render_tree(subtree, depth + 1, out);
                out.push_str(&format!("{indent}],\n"));
            }
        }
    }
}

impl Exporter for PhpExporter {
    fn format(&self) -> Format {
        Format::Php
    }

    fn serialize(&self, tree: &TranslationTree, _ctx: &ExportContext) -> Result<Vec<u8>, Error> {
        let mut out = String::from("<?php\n\nreturn [\n");
        render_tree(tree, 1, &mut out);
        out.push_str("];\n");
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::tests::sample_tree;
    use crate::locale::Locale;
    use indoc::indoc;

    #[test]
    fn test_php_output() {
        let locale: Locale = "en_GB".parse().unwrap();
        let ctx = ExportContext {
            sheet: "common",
            locale: &locale,
            default_locale: "en",
            separator: ".",
        };
        let bytes = PhpExporter.serialize(&sample_tree(), &ctx).unwrap();
        let rendered = String::from_utf8(bytes).unwrap();
        assert_eq!(
            rendered,
            indoc! {r#"
                <?php

                return [
                    'homepage' => [
                        'title' => 'Hello',
                        'subtitle' => 'World',
                    ],
                    'footer' => 'Bye',
                ];
            "#}
        );
    }

    #[test]
    fn test_php_escaping() {
        let mut tree = TranslationTree::new();
        tree.insert(
            &crate::keypath::KeyPath::parse("note", ".").unwrap(),
            r"it's a backslash: \",
        );
        let locale: Locale = "en".parse().unwrap();
        let ctx = ExportContext {
            sheet: "common",
            locale: &locale,
            default_locale: "en",
            separator: ".",
        };
        let bytes = PhpExporter.serialize(&tree, &ctx).unwrap();
        let rendered = String::from_utf8(bytes).unwrap();
        assert!(rendered.contains(r"'note' => 'it\'s a backslash: \\',"));
    }
}
