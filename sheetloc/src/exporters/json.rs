//! JSON exporter. Pretty-printed, trailing newline, key order as inserted.

use crate::{
    error::Error,
    exporters::{ExportContext, Exporter, Format},
    tree::TranslationTree,
};

pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn serialize(&self, tree: &TranslationTree, _ctx: &ExportContext) -> Result<Vec<u8>, Error> {
        let mut bytes = serde_json::to_vec_pretty(tree)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
