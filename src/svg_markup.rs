// src/svg_markup.rs
//
// Locates the root <svg> element of a fetched payload. The payload is usually
// a standalone SVG file but may be an HTML page wrapping one, so the scan is
// lenient about end tags and only counts <svg> elements that are not nested in
// another <svg>.

use crate::error::EmbedError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Return the source text of the single top-level `<svg>` element in `markup`.
///
/// Fails with [`EmbedError::NoSvg`] when there is none and
/// [`EmbedError::MultipleSvg`] when there are several.
pub fn extract_root_svg(markup: &str) -> Result<&str, EmbedError> {
    let mut reader = Reader::from_str(markup);
    reader.check_end_names(false);

    let mut depth = 0usize;
    let mut start = 0usize;
    let mut roots = 0usize;
    let mut first: Option<(usize, usize)> = None;

    loop {
        let before = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(ref e) if is_svg(e.local_name().as_ref()) => {
                if depth == 0 {
                    start = tag_start(markup, before);
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(ref e) if is_svg(e.local_name().as_ref()) => {
                // a stray </svg> outside any svg is ignored
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 && first.is_none() {
                        first = Some((start, reader.buffer_position()));
                    }
                }
            }
            Event::Empty(ref e) if depth == 0 && is_svg(e.local_name().as_ref()) => {
                roots += 1;
                if first.is_none() {
                    first = Some((tag_start(markup, before), reader.buffer_position()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(EmbedError::Markup("unterminated <svg> element".to_string()));
    }

    match (roots, first) {
        (0, _) | (_, None) => Err(EmbedError::NoSvg),
        (1, Some((from, to))) => Ok(&markup[from..to]),
        (n, _) => Err(EmbedError::MultipleSvg(n)),
    }
}

fn is_svg(local_name: &[u8]) -> bool {
    local_name.eq_ignore_ascii_case(b"svg")
}

/// Offset of the `<` opening the tag just read. Depending on the preceding
/// event the reader may already have consumed it.
fn tag_start(markup: &str, before: usize) -> usize {
    if markup.as_bytes().get(before) == Some(&b'<') {
        before
    } else {
        markup[..before].rfind('<').unwrap_or(before)
    }
}
