//! HTML rendering with quick-xml.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ReportError, Result};
use crate::format::center;
use crate::layout::{BANNER_WIDTH, Block, Grid};

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ReportError::Html(e.to_string()))
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn write_grid<W: Write>(writer: &mut Writer<W>, grid: &Grid) -> Result<()> {
    let mut table = BytesStart::new("table");
    table.push_attribute(("border", "1"));
    table.push_attribute(("class", "dataframe"));
    emit(writer, Event::Start(table))?;

    emit(writer, Event::Start(BytesStart::new("thead")))?;
    emit(writer, Event::Start(BytesStart::new("tr")))?;
    for label in &grid.header {
        write_text_element(writer, "th", label)?;
    }
    emit(writer, Event::End(BytesEnd::new("tr")))?;
    emit(writer, Event::End(BytesEnd::new("thead")))?;

    emit(writer, Event::Start(BytesStart::new("tbody")))?;
    for row in &grid.rows {
        emit(writer, Event::Start(BytesStart::new("tr")))?;
        for (index, value) in row.iter().enumerate() {
            // first cell names the row
            let tag = if index == 0 { "th" } else { "td" };
            write_text_element(writer, tag, value)?;
        }
        emit(writer, Event::End(BytesEnd::new("tr")))?;
    }
    emit(writer, Event::End(BytesEnd::new("tbody")))?;

    emit(writer, Event::End(BytesEnd::new("table")))
}

fn write_block<W: Write>(writer: &mut Writer<W>, block: &Block) -> Result<()> {
    match block {
        Block::Banner(text) => write_text_element(writer, "p", &center(text, BANNER_WIDTH, '=')),
        Block::Heading(text) => write_text_element(writer, "h2", text.trim()),
        Block::Paragraph(text) => write_text_element(writer, "p", text),
        Block::Table(grid) => write_grid(writer, grid),
        Block::Break => emit(writer, Event::Empty(BytesStart::new("br"))),
    }
}

/// Renders laid-out blocks as a standalone HTML document.
pub fn render_html(blocks: &[Block], title: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(&mut writer, Event::Start(BytesStart::new("html")))?;
    emit(&mut writer, Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    emit(&mut writer, Event::Empty(meta))?;
    write_text_element(&mut writer, "title", title)?;
    emit(&mut writer, Event::End(BytesEnd::new("head")))?;

    emit(&mut writer, Event::Start(BytesStart::new("body")))?;
    for block in blocks {
        write_block(&mut writer, block)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("body")))?;
    emit(&mut writer, Event::End(BytesEnd::new("html")))?;

    let mut html = String::from_utf8(writer.into_inner())
        .map_err(|e| ReportError::Html(e.to_string()))?;
    html.push('\n');
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_escapes_values() {
        let blocks = vec![
            Block::Heading(" Variable Summary ".to_string()),
            Block::Table(Grid {
                header: vec![String::new(), "Name".to_string()],
                rows: vec![vec!["mode".to_string(), "<b>Smith & Co</b>".to_string()]],
            }),
            Block::Break,
        ];
        let html = render_html(&blocks, "titanic").unwrap();

        assert!(html.starts_with("<html>"));
        assert!(html.contains("<title>titanic</title>"));
        assert!(html.contains("<h2>Variable Summary</h2>"));
        assert!(html.contains(r#"<table border="1" class="dataframe">"#));
        assert!(html.contains("<th>mode</th>"));
        assert!(html.contains("<td>&lt;b&gt;Smith &amp; Co&lt;/b&gt;</td>"));
        assert!(html.contains("<br/>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
