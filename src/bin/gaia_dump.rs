//! Diagnostic tool: decodes geometry BLOB files and reports what the reader finds.
//!
//! Each file holds one BLOB, either raw bytes or hex text as produced by
//! SQLite's `hex()` (an optional `X'...'` wrapper is accepted).
//!
//! Usage:
//!     cargo run --bin gaia_dump -- <blob_file_or_directory>

use anyhow::{bail, Context, Result};
use gaiageo::{Geometry, GaiaReader};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("Usage: gaia_dump <blob_file_or_directory>");
    }

    let path = PathBuf::from(&args[1]);
    let mut files = Vec::new();
    if path.is_dir() {
        for entry in fs::read_dir(&path).with_context(|| format!("reading {}", path.display()))? {
            let p = entry?.path();
            if p.is_file() {
                files.push(p);
            }
        }
        files.sort();
    } else {
        files.push(path);
    }

    let mut reader = GaiaReader::new();
    let (mut decoded, mut skipped, mut failed) = (0, 0, 0);

    for file in &files {
        let name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let blob = load_blob(file)?;
        print!("{:<40} {:>8} bytes  ", name, blob.len());

        reader.clear_notifications();
        match reader.decode(&blob) {
            Ok(Some(geom)) => {
                decoded += 1;
                println!("{} srid={}", geom.kind(), geom.srid);
                if let Some(env) = geom.envelope {
                    println!("    {}", env);
                }
                describe(&geom.geometry, 1);
            }
            Ok(None) => {
                skipped += 1;
                println!("not a geometry");
            }
            Err(e) => {
                failed += 1;
                println!("CORRUPT: {}", e);
            }
        }
        for note in reader.notifications() {
            println!("    {}", note);
        }
    }

    println!();
    println!(
        "Results: {} decoded, {} not geometry, {} corrupt out of {} total",
        decoded,
        skipped,
        failed,
        files.len()
    );
    Ok(())
}

fn load_blob(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    match std::str::from_utf8(&bytes) {
        Ok(text) if looks_like_hex(text) => parse_hex(text)
            .with_context(|| format!("invalid hex in {}", path.display())),
        _ => Ok(bytes),
    }
}

fn strip_hex(text: &str) -> &str {
    let t = text.trim();
    t.strip_prefix("X'")
        .or_else(|| t.strip_prefix("x'"))
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(t)
}

fn looks_like_hex(text: &str) -> bool {
    let t = strip_hex(text);
    !t.is_empty() && t.len() % 2 == 0 && t.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let t = strip_hex(text);
    (0..t.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&t[i..i + 2], 16).map_err(anyhow::Error::from))
        .collect()
}

fn describe(geom: &Geometry, indent: usize) {
    let pad = "    ".repeat(indent);
    match geom {
        Geometry::Point(p) => println!("{}Point {}", pad, p.0),
        Geometry::LineString(ls) => println!("{}LineString, {} coordinates", pad, ls.len()),
        Geometry::Polygon(poly) => println!(
            "{}Polygon, {} rings, shell of {} coordinates",
            pad,
            poly.ring_count(),
            poly.exterior.len()
        ),
        Geometry::MultiPoint(mp) => println!("{}MultiPoint, {} points", pad, mp.0.len()),
        Geometry::MultiLineString(mls) => {
            println!("{}MultiLineString, {} lines", pad, mls.0.len())
        }
        Geometry::MultiPolygon(mpoly) => {
            println!("{}MultiPolygon, {} polygons", pad, mpoly.0.len())
        }
        Geometry::GeometryCollection(gc) => {
            println!("{}GeometryCollection, {} members", pad, gc.0.len());
            for member in &gc.0 {
                describe(member, indent + 1);
            }
        }
    }
}
