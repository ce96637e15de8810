//! # Export Engine
//!
//! Serializes the full catalog to the two shareable formats:
//!
//! - **CSV** (`msp-service-catalog.csv`): a header row plus one row per
//!   service, RFC 4180 quoting, CRLF line endings.
//! - **DOCX** (`msp-service-catalog.docx`): a minimal Office Open XML package
//!   with a single section and one paragraph per service.
//!
//! Exports always read the whole catalog. Whatever search or category filter
//! a UI is showing has no effect here.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Service;
use serde::Serialize;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const CSV_FILENAME: &str = "msp-service-catalog.csv";
pub const DOCX_FILENAME: &str = "msp-service-catalog.docx";

pub const CSV_HEADERS: [&str; 10] = [
    "ServiceName",
    "Category",
    "ShortDescription",
    "Description",
    "Pricing",
    "ResponseTime",
    "ResolutionTime",
    "Availability",
    "EmergencySupport",
    "Tags",
];

/// Service name size in half-points (14pt).
const TITLE_SIZE: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Docx,
    All,
}

pub fn run(catalog: &Catalog, dir: &Path, format: ExportFormat) -> Result<CmdResult> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(CatalogError::Io)?;
    }

    let mut written = Vec::new();
    if matches!(format, ExportFormat::Csv | ExportFormat::All) {
        let path = dir.join(CSV_FILENAME);
        fs::write(&path, to_csv(catalog.services())?).map_err(CatalogError::Io)?;
        written.push(path);
    }
    if matches!(format, ExportFormat::Docx | ExportFormat::All) {
        let path = dir.join(DOCX_FILENAME);
        fs::write(&path, to_docx(catalog.services())?).map_err(CatalogError::Io)?;
        written.push(path);
    }

    let mut result = CmdResult::default();
    for path in &written {
        info!(path = %path.display(), services = catalog.len(), "catalog exported");
        result.add_message(CmdMessage::success(format!(
            "Exported {} services to {}",
            catalog.len(),
            path.display()
        )));
    }
    Ok(result.with_export_paths(written))
}

#[derive(Serialize)]
struct CsvRow<'a> {
    service_name: &'a str,
    category: &'a str,
    short_description: &'a str,
    description: &'a str,
    pricing: &'a str,
    response_time: &'a str,
    resolution_time: &'a str,
    availability: &'a str,
    emergency_support: bool,
    tags: String,
}

impl<'a> From<&'a Service> for CsvRow<'a> {
    fn from(s: &'a Service) -> Self {
        Self {
            service_name: &s.service_name,
            category: s.category.label(),
            short_description: &s.short_description,
            description: &s.description,
            pricing: &s.pricing.display_text,
            response_time: &s.service_level.response_time,
            resolution_time: &s.service_level.resolution_time,
            availability: &s.service_level.availability,
            emergency_support: s.service_level.emergency_support,
            tags: s.tags.join(", "),
        }
    }
}

pub fn to_csv(services: &[Service]) -> Result<String> {
    // Header written by hand: serialize() alone emits none for an empty catalog.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for service in services {
        writer.serialize(CsvRow::from(service))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::Encoding(e.to_string()))
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

pub fn to_docx(services: &[Service]) -> Result<Vec<u8>> {
    let document = document_xml(services);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", ROOT_RELS_XML),
        ("word/document.xml", document.as_str()),
    ] {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())
            .map_err(|e| CatalogError::Encoding(e.to_string()))?;
    }

    Ok(zip.finish()?.into_inner())
}

fn document_xml(services: &[Service]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    for service in services {
        xml.push_str("<w:p>");
        xml.push_str(&format!(
            r#"<w:r><w:rPr><w:b/><w:sz w:val="{}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
            TITLE_SIZE,
            escape_xml(&service.service_name)
        ));
        for line in [
            format!("Category: {}", service.category.label()),
            format!("Description: {}", service.description),
            format!("Pricing: {}", service.pricing.display_text),
        ] {
            xml.push_str(&format!(
                r#"<w:r><w:br/><w:t xml:space="preserve">{}</w:t></w:r>"#,
                escape_xml(&line)
            ));
        }
        xml.push_str("</w:p>");
    }

    xml.push_str("<w:sectPr/></w:body></w:document>");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
