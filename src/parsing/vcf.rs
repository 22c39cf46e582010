//! Streaming reader for VCF data lines.
//!
//! Only the fixed columns needed by the variant endpoints are decoded
//! (`CHROM`, `POS`, `ID`, `REF`, `ALT`, `QUAL`). Header lines are skipped, and
//! so are data lines that cannot be read as a variant: fewer than eight
//! columns, a chromosome that is not a plain number, or unparseable POS/QUAL.
//!
//! Files ending in `.gz` are decoded with a multi-member gzip decoder so that
//! bgzip-compressed VCFs read through to the end.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::core::variant::Variant;

/// Minimum number of tab-separated columns in a usable data line
pub const MIN_VCF_FIELDS: usize = 8;

/// Parse one VCF data line, returning `None` for headers and malformed lines.
pub fn parse_variant_line(line: &str) -> Option<Variant> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_VCF_FIELDS {
        return None;
    }

    let chrom = fields[0];
    if chrom.is_empty() || !chrom.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let pos = fields[1].parse().ok()?;
    let qual = match fields[5] {
        "." => None,
        value => Some(value.parse().ok()?),
    };

    Some(Variant {
        chrom: chrom.to_string(),
        pos,
        id: fields[2].to_string(),
        reference: fields[3].to_string(),
        alt: fields[4].to_string(),
        qual,
    })
}

/// Lazily yields the variants of a VCF stream, one line at a time.
///
/// Malformed lines are skipped silently; I/O and decoding errors are yielded
/// and end the stream.
pub struct VariantReader<R> {
    inner: R,
    buf: String,
    line_number: usize,
    skipped: usize,
    done: bool,
}

impl<R: BufRead> VariantReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_number: 0,
            skipped: 0,
            done: false,
        }
    }

    /// Number of malformed data lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for VariantReader<R> {
    type Item = io::Result<Variant>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_number += 1;
                    if self.buf.starts_with('#') {
                        continue;
                    }
                    if let Some(variant) = parse_variant_line(&self.buf) {
                        return Some(Ok(variant));
                    }
                    if !self.buf.trim().is_empty() {
                        self.skipped += 1;
                        debug!(line = self.line_number, "Skipping malformed VCF line");
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Open a VCF file for streaming, transparently decompressing `.gz` files.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be opened.
pub fn open_variant_file(path: &Path) -> io::Result<VariantReader<Box<dyn BufRead + Send>>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    let reader: Box<dyn BufRead + Send> = if is_gzip {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(VariantReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    const VCF: &str = "##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
16\t60000\trs1\tA\tG\t50\tPASS\t.
16\t60010\trs2\tC\tT\t.\tPASS\t.
chr16\t60020\trs3\tG\tA\t.\tPASS\t.
16\t60030\trs4\tT
16\tabc\trs5\tG\tA\t.\tPASS\t.
16\t60050\trs6\tG\tA\tlow\tPASS\t.
16\t60060\trs7\tG\tA\t12.5\tPASS\t.
";

    #[test]
    fn test_parse_variant_line() {
        let variant = parse_variant_line("16\t60000\trs1\tA\tG\t50\tPASS\tAC=1\n").unwrap();
        assert_eq!(variant.chrom, "16");
        assert_eq!(variant.pos, 60000);
        assert_eq!(variant.id, "rs1");
        assert_eq!(variant.reference, "A");
        assert_eq!(variant.alt, "G");
        assert_eq!(variant.qual, Some(50.0));
    }

    #[test]
    fn test_missing_qual_is_none() {
        let variant = parse_variant_line("16\t1\t.\tA\tG\t.\tPASS\t.").unwrap();
        assert_eq!(variant.qual, None);
    }

    #[test]
    fn test_invalid_lines_rejected() {
        assert!(parse_variant_line("#CHROM\tPOS").is_none());
        assert!(parse_variant_line("").is_none());
        assert!(parse_variant_line("16\t1\trs1\tA\tG\t.\tPASS").is_none());
        assert!(parse_variant_line("X\t1\trs1\tA\tG\t.\tPASS\t.").is_none());
        assert!(parse_variant_line("chr16\t1\trs1\tA\tG\t.\tPASS\t.").is_none());
    }

    #[test]
    fn test_reader_skips_malformed_lines() {
        let mut reader = VariantReader::new(Cursor::new(VCF));
        let ids: Vec<String> = reader
            .by_ref()
            .map(|r| r.unwrap().id)
            .collect();
        assert_eq!(ids, vec!["rs1", "rs2", "rs7"]);
        assert_eq!(reader.skipped(), 4);
    }

    #[test]
    fn test_open_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.vcf.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(VCF.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let variants: Vec<Variant> = open_variant_file(&path)
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[2].qual, Some(12.5));
    }

    #[test]
    fn test_open_missing_file() {
        assert!(open_variant_file(Path::new("/nonexistent/calls.vcf")).is_err());
    }
}
