use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::{info, warn};

use crate::parser::Extraction;
use crate::seed;

pub const LOCATIONS_FILE: &str = "locations.json";
pub const SEED_FILE: &str = "seed_fellowships.sql";
pub const MISSING_FILE: &str = "missing_regions.json";
pub const CONFLICTS_FILE: &str = "conflicting_regions.json";

/// Two-space pretty printing with every non-ASCII char written as `\uXXXX`.
struct AsciiPretty<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPretty<'_> {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

/// Render `value` as ASCII-only, 2-space indented JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = AsciiPretty(PrettyFormatter::with_indent(b"  "));
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write every artifact for one extraction into `dir`, creating it if needed.
/// Returns the written paths in write order.
pub fn write_artifacts(dir: &Path, extraction: &Extraction) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();

    let locations = dir.join(LOCATIONS_FILE);
    write_file(&locations, &to_json(&extraction.tree)?)?;
    written.push(locations);

    let seed_path = dir.join(SEED_FILE);
    write_file(&seed_path, &seed::render(&extraction.tree))?;
    written.push(seed_path);

    if !extraction.missing.is_empty() {
        for region in &extraction.missing {
            warn!("Region {:?} has centres but no owning state", region);
        }
        let path = dir.join(MISSING_FILE);
        write_file(&path, &to_json(&extraction.missing)?)?;
        written.push(path);
    }

    if !extraction.conflicts.is_empty() {
        for (region, states) in &extraction.conflicts {
            warn!("Region {:?} is claimed by {} states: {}", region, states.len(), states.join(", "));
        }
        let path = dir.join(CONFLICTS_FILE);
        write_file(&path, &to_json(&extraction.conflicts)?)?;
        written.push(path);
    }

    info!("Wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}

// ── Tests ──
