//! Sample fixture
//!
//! Known sample content, the files generated from it, and the scoped
//! resources directory that owns their cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use packcheck_core::{Codec, Content, Error, Result, Table, SUPPORTED_EXTENSIONS};

use crate::archive::Archiver;

/// Name of the archive written by [`SampleDir::pack`]
pub const ARCHIVE_NAME: &str = "archive.zip";

/// Member name for a format extension: `"csv"` -> `"csv_file.csv"`
pub fn member_name(extension: &str) -> String {
    format!("{extension}_file.{extension}")
}

/// The known content samples are generated from and verified against
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Payload for the tabular formats
    pub table: Table,
    /// Payload for the text format
    pub text: String,
}

impl Default for SampleSet {
    fn default() -> Self {
        Self {
            table: Table::from_rows([["Header A1", "Header B1"], ["Cell A2", "Cell B2"]]),
            text: "Test content\nCell A2  |  Cell B2".to_string(),
        }
    }
}

impl SampleSet {
    /// The payload a codec for `extension` carries
    pub fn content_for(&self, extension: &str) -> Result<Content> {
        match extension {
            "csv" | "xlsx" => Ok(Content::Table(self.table.clone())),
            "pdf" => Ok(Content::Text(self.text.clone())),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A scoped resources directory holding generated sample files and their
/// archive.
///
/// Cleanup removes only the files this value wrote. The directory itself is
/// removed when empty afterwards, so a pre-populated directory survives its
/// fixture.
#[derive(Debug)]
pub struct SampleDir {
    root: PathBuf,
    generated: Vec<PathBuf>,
}

impl SampleDir {
    /// Create the resources directory at `root` if it does not exist yet
    pub fn create<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(Self {
            root,
            generated: Vec::new(),
        })
    }

    /// The resources directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Encode and write one sample file per codec; returns the written paths
    pub fn generate(&mut self, codecs: &[&dyn Codec], samples: &SampleSet) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for codec in codecs {
            let content = samples.content_for(codec.extension())?;
            let bytes = codec.encode(&content)?;

            let path = self.root.join(member_name(codec.extension()));
            fs::write(&path, bytes)?;
            self.generated.push(path.clone());
            paths.push(path);
        }

        Ok(paths)
    }

    /// Archive every supported sample file currently in the directory.
    ///
    /// Files are matched by extension, case-insensitively, and stored under
    /// their base filenames. The archive lands at [`ARCHIVE_NAME`] inside the
    /// directory, replacing any previous one, and is removed again on cleanup.
    pub fn pack(&mut self) -> Result<PathBuf> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && has_supported_extension(&path) {
                files.push(path);
            }
        }
        files.sort();

        let archive_path = self.root.join(ARCHIVE_NAME);
        Archiver::pack(&files, &archive_path)?;
        if !self.generated.contains(&archive_path) {
            self.generated.push(archive_path.clone());
        }

        Ok(archive_path)
    }

    /// Remove the generated files, then the directory itself if empty
    pub fn close(mut self) -> Result<()> {
        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> std::io::Result<()> {
        for path in self.generated.drain(..) {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }

        if self.root.exists() && fs::read_dir(&self.root)?.next().is_none() {
            fs::remove_dir(&self.root)?;
        }
        Ok(())
    }
}

impl Drop for SampleDir {
    fn drop(&mut self) {
        // Cleanup must also happen when a test assertion unwinds
        let _ = self.cleanup();
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_name() {
        assert_eq!(member_name("csv"), "csv_file.csv");
        assert_eq!(member_name("xlsx"), "xlsx_file.xlsx");
        assert_eq!(member_name("pdf"), "pdf_file.pdf");
    }

    #[test]
    fn test_content_for_selects_payload_kind() {
        let samples = SampleSet::default();
        assert_eq!(samples.content_for("csv").unwrap().kind(), "table");
        assert_eq!(samples.content_for("xlsx").unwrap().kind(), "table");
        assert_eq!(samples.content_for("pdf").unwrap().kind(), "text");
        assert!(matches!(
            samples.content_for("docx"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_sample_second_row() {
        let samples = SampleSet::default();
        assert_eq!(samples.table.row(1).unwrap(), ["Cell A2", "Cell B2"]);
    }

    #[test]
    fn test_has_supported_extension_is_case_insensitive() {
        assert!(has_supported_extension(Path::new("a/b/FILE.CSV")));
        assert!(has_supported_extension(Path::new("file.Xlsx")));
        assert!(!has_supported_extension(Path::new("file.txt")));
        assert!(!has_supported_extension(Path::new("file")));
    }
}
