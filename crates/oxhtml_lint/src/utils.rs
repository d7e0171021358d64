use std::ops::Range;

/// Finds the range of a tag name, given the offset of the tag's opening `<`
pub fn naive_range(source: &[u8], mut start: usize) -> Range<usize> {
    while start < source.len() {
        if !source[start].is_ascii_whitespace() && !matches!(source[start], b'<' | b'/') {
            break;
        }
        start += 1;
    }
    let mut end = start;
    while end < source.len() {
        if source[end].is_ascii_whitespace() || matches!(source[end], b'>' | b'/') {
            break;
        }
        end += 1;
    }
    start..end
}
