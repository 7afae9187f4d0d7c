//! XLIFF 1.2 exporter.
//!
//! Trees are flattened back into dotted keys: one `<trans-unit>` per leaf,
//! with the full key in `resname` and `<source>` (key-addressed units, the
//! convention translation management tools expect when the spreadsheet is
//! the canonical source) and the translated message in `<target>`.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    error::Error,
    exporters::{ExportContext, Exporter, Format},
    tree::TranslationTree,
};

pub struct XliffExporter;

impl Exporter for XliffExporter {
    fn format(&self) -> Format {
        Format::Xliff
    }

    fn serialize(&self, tree: &TranslationTree, ctx: &ExportContext) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::new();
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut xliff = BytesStart::new("xliff");
        xliff.push_attribute(("xmlns", "urn:oasis:names:tc:xliff:document:1.2"));
        xliff.push_attribute(("version", "1.2"));
        writer.write_event(Event::Start(xliff))?;

        let mut file = BytesStart::new("file");
        file.push_attribute(("source-language", ctx.default_locale));
        file.push_attribute(("target-language", ctx.locale.bcp47().as_str()));
        file.push_attribute(("datatype", "plaintext"));
        file.push_attribute(("original", ctx.sheet));
        writer.write_event(Event::Start(file))?;

        writer.write_event(Event::Start(BytesStart::new("body")))?;

        for (index, (key, value)) in tree.flatten(ctx.separator).into_iter().enumerate() {
            let mut unit = BytesStart::new("trans-unit");
            unit.push_attribute(("id", (index + 1).to_string().as_str()));
            unit.push_attribute(("resname", key.as_str()));
            writer.write_event(Event::Start(unit))?;

            writer.write_event(Event::Start(BytesStart::new("source")))?;
            writer.write_event(Event::Text(BytesText::new(&key)))?;
            writer.write_event(Event::End(BytesEnd::new("source")))?;

            writer.write_event(Event::Start(BytesStart::new("target")))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new("target")))?;

            writer.write_event(Event::End(BytesEnd::new("trans-unit")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("body")))?;
        writer.write_event(Event::End(BytesEnd::new("file")))?;
        writer.write_event(Event::End(BytesEnd::new("xliff")))?;

        buffer.push(b'\n');
        Ok(buffer)
    }
}
