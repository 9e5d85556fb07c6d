use docx_rs::{
    DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild,
};

use super::types::{DocxExtractor, PageExtraction};
use super::ExtractionError;

/// DOCX text extractor using the docx-rs crate.
/// Walks paragraph runs and table cells; the whole document is treated
/// as one page (DOCX has no fixed pagination).
pub struct DocxTextExtractor;

impl DocxExtractor for DocxTextExtractor {
    fn extract_text(&self, docx_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
        let docx = docx_rs::read_docx(docx_bytes)
            .map_err(|e| ExtractionError::DocxParsing(e.to_string()))?;

        let mut lines: Vec<String> = Vec::new();

        for child in docx.document.children.iter() {
            match child {
                DocumentChild::Paragraph(para) => {
                    let text = paragraph_text(para);
                    if !text.trim().is_empty() {
                        lines.push(text);
                    }
                }
                DocumentChild::Table(table) => {
                    for TableChild::TableRow(row) in table.rows.iter() {
                        let mut cells: Vec<String> = Vec::new();
                        for TableRowChild::TableCell(cell) in row.cells.iter() {
                            let mut cell_text = String::new();
                            for content in cell.children.iter() {
                                if let TableCellContent::Paragraph(para) = content {
                                    if !cell_text.is_empty() {
                                        cell_text.push(' ');
                                    }
                                    cell_text.push_str(&paragraph_text(para));
                                }
                            }
                            if !cell_text.trim().is_empty() {
                                cells.push(cell_text);
                            }
                        }
                        if !cells.is_empty() {
                            lines.push(cells.join("\t"));
                        }
                    }
                }
                _ => {}
            }
        }

        let text = lines.join("\n");
        let confidence = if text.trim().is_empty() { 0.0 } else { 0.97 };

        Ok(vec![PageExtraction {
            page_number: 1,
            text,
            confidence,
            warnings: vec![],
        }])
    }
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| {
            if let ParagraphChild::Run(run) = pc {
                Some(
                    run.children
                        .iter()
                        .filter_map(|rc| {
                            if let RunChild::Text(t) = rc {
                                Some(t.text.clone())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
