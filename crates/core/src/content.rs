/// Width of the description column in the changelog table
pub const DESCRIPTION_WIDTH: usize = 60;

const LINE_FEED: u8 = b'\n';
const SPACE: u8 = b' ';

/// Inline markup tokens removed from release notes
const XML_SYMBOLS: [&str; 12] = [
    "<br>", "<br/>", "<br />", "<ul>", "<li>", "</ul>", "<strong>", "</strong>", "<code>",
    "</code>", "<em>", "</em>",
];

/// Closing list item tag, turned into a line break
const LIST_ITEM_CLOSE: &str = "</li>";

/// Strip the known inline markup tokens from a release note.
///
/// This is a literal substring replacement, not an HTML parser: anything that
/// does not exactly match one of the known tokens is left in place.
pub fn trim_xml_symbols(text: &str) -> String {
    let mut trimmed = text.trim().to_string();
    for symbol in XML_SYMBOLS {
        trimmed = trimmed.replace(symbol, "");
    }
    trimmed.replace(LIST_ITEM_CLOSE, "\n")
}

/// Limit `content` to `max_lines` lines and wrap it at `width` columns.
///
/// Everything from the `max_lines`-th line feed onwards is dropped. Wrapping
/// then walks the bytes once, counting columns. Whenever the column count hits
/// a multiple of `width` the current byte is turned into a line feed if it is a
/// space; otherwise the closest preceding space becomes the line feed and the
/// column count restarts at the number of bytes between that space and the
/// current position. If no space precedes the current position the line is
/// left unbroken. A `width` of zero disables wrapping.
///
/// Only ASCII bytes are rewritten, so the result stays valid UTF-8.
pub fn regulate_width_and_lines(content: &str, width: usize, max_lines: usize) -> String {
    let mut bytes = truncate_lines(content.as_bytes(), max_lines).to_vec();

    if width > 0 {
        let mut column = 0;
        for index in 0..bytes.len() {
            let current = bytes[index];
            column += 1;

            if column % width == 0 {
                if current == SPACE {
                    bytes[index] = LINE_FEED;
                    column = 0;
                } else {
                    column = match preceding_space(&bytes, index) {
                        Some(space) => {
                            bytes[space] = LINE_FEED;
                            index - space
                        }
                        None => 0,
                    };
                }
            }

            if current == LINE_FEED {
                column = 0;
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Keep the bytes before the `max_lines`-th line feed.
fn truncate_lines(bytes: &[u8], max_lines: usize) -> &[u8] {
    let mut count = 0;
    for (index, &byte) in bytes.iter().enumerate() {
        if byte == LINE_FEED {
            count += 1;
        }
        if count == max_lines {
            return &bytes[..index];
        }
    }
    bytes
}

/// Position of the closest space at or before `from`, bounded by the buffer start.
fn preceding_space(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[..=from].iter().rposition(|&byte| byte == SPACE)
}

/// Shape a raw feed description for the description column.
///
/// Original line feeds are dropped first so that only list items produce
/// line breaks, then markup is stripped and the text is reflowed.
pub fn normalize_description(raw: &str, width: usize, max_lines: usize) -> String {
    let flattened = raw.replace('\n', "");
    let trimmed = trim_xml_symbols(&flattened);
    regulate_width_and_lines(&trimmed, width, max_lines)
}
