//! Archive writer and reader
//!
//! Sample files go into a flat zip archive under their base filenames;
//! verification reads members straight out of the archive into memory.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::Path;

use packcheck_core::{Error, Result};

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::other(e.to_string())
}

/// Archive writer
pub struct Archiver;

impl Archiver {
    /// Write the given files into a zip archive under their base filenames.
    ///
    /// No directory structure is preserved. An existing archive at
    /// `archive_path` is replaced.
    pub fn pack<P, Q>(paths: &[P], archive_path: Q) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let file = File::create(&archive_path)?;
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for path in paths {
            let path = path.as_ref();
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| Error::other(format!("Not a file path: {}", path.display())))?;

            log::debug!("Adding {name} to {}", archive_path.as_ref().display());
            zip.start_file(name, options).map_err(zip_err)?;
            let mut input = File::open(path)?;
            io::copy(&mut input, &mut zip)?;
        }

        zip.finish().map_err(zip_err)?;
        Ok(())
    }
}

/// Read-side handle over a sample archive
pub struct SampleArchive<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl SampleArchive<File> {
    /// Open an archive file for member lookups
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file)
    }
}

impl<R: Read + Seek> SampleArchive<R> {
    /// Open an archive from a reader
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader).map_err(zip_err)?;
        Ok(Self { archive })
    }

    /// Names of all archive members
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Number of archive members
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// True if the archive has no members
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Read a member's bytes fully into memory
    pub fn member(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(name) {
            Ok(f) => f,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::MemberNotFound(name.to_string()))
            }
            Err(e) => return Err(zip_err(e)),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pack_uses_base_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        let file_path = nested.join("sample.csv");
        std::fs::write(&file_path, b"a,b\r\n").unwrap();

        let archive_path = dir.path().join("archive.zip");
        Archiver::pack(&[&file_path], &archive_path).unwrap();

        let archive = SampleArchive::open_file(&archive_path).unwrap();
        assert_eq!(archive.member_names(), ["sample.csv"]);
    }

    #[test]
    fn test_member_bytes_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sample.csv");
        std::fs::write(&file_path, b"payload").unwrap();

        let archive_path = dir.path().join("archive.zip");
        Archiver::pack(&[&file_path], &archive_path).unwrap();

        let mut archive = SampleArchive::open_file(&archive_path).unwrap();
        assert_eq!(archive.member("sample.csv").unwrap(), b"payload");
    }

    #[test]
    fn test_missing_member_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sample.csv");
        std::fs::write(&file_path, b"a").unwrap();

        let archive_path = dir.path().join("archive.zip");
        Archiver::pack(&[&file_path], &archive_path).unwrap();

        let mut archive = SampleArchive::open_file(&archive_path).unwrap();
        match archive.member("absent.pdf") {
            Err(Error::MemberNotFound(name)) => assert_eq!(name, "absent.pdf"),
            other => panic!("expected MemberNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_pack_overwrites_existing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        std::fs::write(&first, b"1").unwrap();
        std::fs::write(&second, b"2").unwrap();

        let archive_path = dir.path().join("archive.zip");
        Archiver::pack(&[&first, &second], &archive_path).unwrap();
        Archiver::pack(&[&second], &archive_path).unwrap();

        let archive = SampleArchive::open_file(&archive_path).unwrap();
        assert_eq!(archive.member_names(), ["second.csv"]);
    }
}
