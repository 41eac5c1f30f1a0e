//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use drugbank::extract::{ExtractSpec, Extractor, Table};
use drugbank::tree::Document;
use tempfile::TempDir;

/// Parse a fixture, panicking on malformed XML.
pub fn parse(xml: &str) -> Document {
    Document::parse(xml.as_bytes()).expect("fixture should parse")
}

/// Run `spec` over `xml` with the namespace declared in the fixture.
pub fn run(xml: &str, spec: &ExtractSpec) -> Table {
    let document = parse(xml);
    Extractor::for_document(&document).run(&document, spec)
}

/// Write `xml` into a fresh temporary directory.
pub fn write_fixture(xml: &str, name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, xml).expect("Failed to write fixture");
    (dir, path)
}
