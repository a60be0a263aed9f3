//! Codec trait

use crate::content::Content;
use crate::error::Result;

/// A file format abstracted as an `encode`/`decode` capability pair.
///
/// Implementations wrap one third-party reader/writer pair and translate
/// between bytes and [`Content`]. The round-trip machinery (sample
/// generation, archiving, verification) only ever talks to this trait, so
/// the underlying library for a format can be swapped without touching it.
///
/// `decode(encode(c))` is not required to reproduce `c` byte-for-byte:
/// lossy formats (PDF text extraction) may return content that only
/// *contains* the original. The verifier owns the comparison semantics.
pub trait Codec {
    /// File extension this codec handles, lowercase, without the dot
    fn extension(&self) -> &'static str;

    /// Encode content into the format's byte representation
    fn encode(&self, content: &Content) -> Result<Vec<u8>>;

    /// Decode the format's bytes back into content
    fn decode(&self, bytes: &[u8]) -> Result<Content>;
}
