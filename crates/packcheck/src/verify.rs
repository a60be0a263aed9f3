//! Verification of archive members against expected content

use std::io::{Read, Seek};

use packcheck_core::{Codec, Content, Error, Result, Table};

use crate::archive::SampleArchive;
use crate::fixture::{member_name, SampleSet};

/// Decode one archive member through a codec and compare it with the
/// expected content.
///
/// The member is streamed out of the archive into memory; nothing is
/// extracted to disk.
pub fn verify_member<R: Read + Seek>(
    archive: &mut SampleArchive<R>,
    name: &str,
    codec: &dyn Codec,
    expected: &Content,
) -> Result<()> {
    let bytes = archive.member(name)?;
    let actual = codec.decode(&bytes)?;
    compare(name, expected, &actual)
}

/// Verify every codec's member against the sample set
pub fn verify_samples<R: Read + Seek>(
    archive: &mut SampleArchive<R>,
    codecs: &[&dyn Codec],
    samples: &SampleSet,
) -> Result<()> {
    for codec in codecs {
        let expected = samples.content_for(codec.extension())?;
        verify_member(archive, &member_name(codec.extension()), *codec, &expected)?;
    }
    Ok(())
}

fn compare(member: &str, expected: &Content, actual: &Content) -> Result<()> {
    match (expected, actual) {
        (Content::Table(expected), Content::Table(actual)) => {
            compare_tables(member, expected, actual)
        }
        (Content::Text(expected), Content::Text(actual)) => compare_text(member, expected, actual),
        (expected, actual) => Err(Error::InvalidContentKind {
            expected: expected.kind(),
            actual: actual.kind(),
        }),
    }
}

/// Tables must match structurally, cell for cell
fn compare_tables(member: &str, expected: &Table, actual: &Table) -> Result<()> {
    if expected.row_count() != actual.row_count() {
        return Err(mismatch(
            member,
            format!(
                "expected {} rows, got {}",
                expected.row_count(),
                actual.row_count()
            ),
        ));
    }

    for (i, (want, got)) in expected.rows().iter().zip(actual.rows()).enumerate() {
        if want != got {
            return Err(mismatch(
                member,
                format!("row {i}: expected {want:?}, got {got:?}"),
            ));
        }
    }

    Ok(())
}

/// Extracted text must contain every non-empty trimmed line of the expected
/// text; extraction is not required to preserve layout exactly.
fn compare_text(member: &str, expected: &str, actual: &str) -> Result<()> {
    for line in expected.lines() {
        let line = line.trim();
        if !line.is_empty() && !actual.contains(line) {
            return Err(mismatch(member, format!("missing expected line {line:?}")));
        }
    }
    Ok(())
}

fn mismatch(member: &str, detail: String) -> Error {
    Error::Mismatch {
        member: member.to_string(),
        detail,
    }
}
