//! Percent-encoding of URL path segments.

/// Percent-encodes one URL path segment.
///
/// Everything outside `A-Za-z0-9_.~-` is encoded; in particular `/` becomes
/// `%2F`, so an encoded segment can never introduce a path separator.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Encodes a relative item path into the single URL path segment Blue Ocean
/// uses for nested item names.
///
/// Each segment is encoded independently, then joined with the encoded
/// separator: `["test", "abc"]` becomes `test%2Fabc`. A literal `/` never
/// appears between levels.
pub fn encode_relative_path(segments: &[String]) -> String {
    segments.iter().map(|s| encode_segment(s)).collect::<Vec<_>>().join("%2F")
}
