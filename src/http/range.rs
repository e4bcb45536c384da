//! HTTP Range request parsing module
//!
//! Single `bytes=` ranges only. Anything more elaborate is ignored and the
//! whole file is sent, which browsers' PDF viewers handle fine.

/// Inclusive byte range resolved against a file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    #[inline]
    pub const fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Value for the `Content-Range` header
    pub fn content_range(&self, total: usize) -> String {
        format!("bytes {}-{}/{total}", self.start, self.end)
    }
}

/// Range header parse result
#[derive(Debug, PartialEq, Eq)]
pub enum RangeParseResult {
    /// Serve this part with 206
    Valid(ByteRange),
    /// Respond 416
    NotSatisfiable,
    /// Absent, malformed or multi-range: serve the whole file
    None,
}

/// Parse a Range header value against a file of `file_size` bytes
///
/// # Examples
/// ```
/// use cors_file_server::http::range::{parse_range_header, ByteRange, RangeParseResult};
///
/// let result = parse_range_header(Some("bytes=0-99"), 1000);
/// assert_eq!(result, RangeParseResult::Valid(ByteRange { start: 0, end: 99 }));
///
/// assert_eq!(parse_range_header(None, 1000), RangeParseResult::None);
/// ```
pub fn parse_range_header(range_header: Option<&str>, file_size: usize) -> RangeParseResult {
    let Some(spec) = range_header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeParseResult::None;
    };
    if spec.contains(',') {
        return RangeParseResult::None;
    }
    let Some((first, last)) = spec.split_once('-') else {
        return RangeParseResult::None;
    };

    match (first.trim(), last.trim()) {
        ("", "") => RangeParseResult::None,
        ("", suffix) => suffix_range(suffix, file_size),
        (start, end) => bounded_range(start, end, file_size),
    }
}

/// `-N`: the last N bytes
fn suffix_range(suffix: &str, file_size: usize) -> RangeParseResult {
    match suffix.parse::<usize>() {
        Err(_) => RangeParseResult::None,
        Ok(0) => RangeParseResult::NotSatisfiable,
        Ok(_) if file_size == 0 => RangeParseResult::NotSatisfiable,
        Ok(n) => RangeParseResult::Valid(ByteRange {
            start: file_size.saturating_sub(n),
            end: file_size - 1,
        }),
    }
}

/// `S-` or `S-E`, with E clamped to the last byte
fn bounded_range(start: &str, end: &str, file_size: usize) -> RangeParseResult {
    let Ok(start) = start.parse::<usize>() else {
        return RangeParseResult::None;
    };
    let end = if end.is_empty() {
        None
    } else {
        match end.parse::<usize>() {
            Ok(e) => Some(e),
            Err(_) => return RangeParseResult::None,
        }
    };

    if start >= file_size {
        return RangeParseResult::NotSatisfiable;
    }
    let last = file_size - 1;
    match end {
        Some(e) if e < start => RangeParseResult::NotSatisfiable,
        Some(e) => RangeParseResult::Valid(ByteRange {
            start,
            end: e.min(last),
        }),
        None => RangeParseResult::Valid(ByteRange { start, end: last }),
    }
}
