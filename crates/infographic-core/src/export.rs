//! Standalone export of a rendered infographic.

/// MIME type of the downloaded file.
pub const DOWNLOAD_MIME_TYPE: &str = "text/html";

/// Title of the exported document.
pub const DOCUMENT_TITLE: &str = "Generated Infographic";

/// Inline style applied to the exported document body.
pub const DOCUMENT_STYLE: &str =
    "body { font-family: sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; line-height: 1.6; }";

/// Wrap `fragment` in a minimal HTML document for standalone viewing.
///
/// The fragment is inserted verbatim.
pub fn standalone_document(fragment: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{DOCUMENT_TITLE}</title>
    <style>{DOCUMENT_STYLE}</style>
</head>
<body>
    {fragment}
</body>
</html>"#
    )
}
