//! Directory listing page

use crate::http::response::escape_html;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io;
use std::path::Path;
use tokio::fs;

/// Characters left unescaped in entry links
const LINK_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One entry of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    /// Directory, or symlink to one
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl ListingEntry {
    /// Name as shown: `/` marks directories, `@` marks symlinks
    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{}@", self.name)
        } else if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Relative, percent-encoded link target
    pub fn href(&self) -> String {
        let encoded = utf8_percent_encode(&self.name, LINK_SEGMENT).to_string();
        if self.is_dir {
            format!("{encoded}/")
        } else {
            encoded
        }
    }
}

/// Read a directory's entries, sorted case-insensitively by name
pub async fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let is_symlink = entry
            .file_type()
            .await
            .is_ok_and(|t| t.is_symlink());
        // Follows symlinks, so a link to a directory still links with a slash
        let is_dir = fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir());
        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Render the listing page for `display_path` (the decoded request path)
pub fn render_listing(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut page = format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <hr>\n\
         <ul>\n"
    );
    for entry in entries {
        page.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.href()),
            escape_html(&entry.display_name())
        ));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    page
}
