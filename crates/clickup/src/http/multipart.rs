//! Multipart upload descriptor

use std::fmt;
use std::path::Path;

use tokio::io::AsyncRead;

use crate::error::Result;

/// Content type sent for every uploaded part. The transport does not sniff
/// or trust caller-supplied MIME types.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A single-part `multipart/form-data` upload.
///
/// The reader is streamed into the request body; it is never buffered in
/// full. `file_name` only feeds the part's `Content-Disposition` header and
/// is reduced to its base name.
pub struct MultipartUpload<R> {
    path: String,
    field_name: String,
    reader: R,
    file_name: String,
}

impl<R> MultipartUpload<R>
where
    R: AsyncRead + Send + Sync + 'static,
{
    /// Create an upload of `reader` to `path` as form field `field_name`.
    pub fn new(
        path: impl Into<String>,
        field_name: impl Into<String>,
        reader: R,
        file_name: impl AsRef<str>,
    ) -> Self {
        Self {
            path: path.into(),
            field_name: field_name.into(),
            reader,
            file_name: base_name(file_name.as_ref()),
        }
    }

    /// Target path, relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Form field name of the single part.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// File name advertised in `Content-Disposition`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn into_parts(self) -> (String, String, R, String) {
        (self.path, self.field_name, self.reader, self.file_name)
    }
}

impl MultipartUpload<tokio::fs::File> {
    /// Open `file` and prepare it for upload under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened.
    pub async fn from_path(
        path: impl Into<String>,
        field_name: impl Into<String>,
        file: impl AsRef<Path>,
    ) -> Result<Self> {
        let file = file.as_ref();
        let reader = tokio::fs::File::open(file).await?;
        let file_name = file.to_string_lossy().into_owned();
        Ok(Self::new(path, field_name, reader, file_name))
    }
}

impl<R> fmt::Debug for MultipartUpload<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartUpload")
            .field("path", &self.path)
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Last component of `file_name`, or the name unchanged if it has none.
pub fn base_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("test.txt"), "test.txt");
        assert_eq!(base_name("/tmp/uploads/report.pdf"), "report.pdf");
        assert_eq!(base_name("nested/dir/notes.md"), "notes.md");
        assert_eq!(base_name(".."), "..");
    }

    #[test]
    fn test_new_strips_directories() {
        let upload = MultipartUpload::new(
            "/v2/task/abc/attachment",
            "attachment",
            std::io::Cursor::new(b"data".to_vec()),
            "/home/me/screenshot.png",
        );
        assert_eq!(upload.file_name(), "screenshot.png");
        assert_eq!(upload.field_name(), "attachment");
        assert_eq!(upload.path(), "/v2/task/abc/attachment");
    }

    #[tokio::test]
    async fn test_from_path_opens_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();

        let upload = MultipartUpload::from_path("/v2/task/abc/attachment", "attachment", file.path())
            .await
            .unwrap();
        let expected = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(upload.file_name(), expected);
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = MultipartUpload::from_path("/x", "file", "/definitely/not/here.txt").await;
        assert_matches!(result, Err(crate::Error::Io(_)));
    }
}
