//! Approximate text measurement for the label layout

use unicode_width::UnicodeWidthStr;

/// Average glyph advance as a fraction of the font size, per display column
const GLYPH_ADVANCE: f32 = 0.5;

/// Rich text tags the label understands; they take no space.
const MARKUP_TAGS: &[&str] = &["b", "i", "size", "color", "material", "quad"];

/// Number of lines `text` wraps to inside `max_width` pixels.
///
/// Words wrap greedily, explicit newlines always break, and a word wider
/// than the line is split across as many lines as it needs.
pub(crate) fn measure_lines(text: &str, max_width: f32, font_size: f32) -> usize {
    if text.is_empty() {
        return 0;
    }

    let visible = strip_markup(text);
    let advance = font_size * GLYPH_ADVANCE;
    let space = advance;

    visible
        .split('\n')
        .map(|paragraph| {
            let mut lines = 1;
            let mut line_width = 0.0;

            for word in paragraph.split_whitespace() {
                let width = word.width() as f32 * advance;

                if width > max_width {
                    if line_width > 0.0 {
                        lines += 1;
                    }
                    let spans = (width / max_width).ceil() as usize;
                    lines += spans - 1;
                    line_width = width - (spans - 1) as f32 * max_width;
                    continue;
                }

                let needed = if line_width > 0.0 { line_width + space + width } else { width };
                if needed > max_width {
                    lines += 1;
                    line_width = width;
                } else {
                    line_width = needed;
                }
            }

            lines
        })
        .sum()
}

/// Remove rich text tags, keeping any `<` that does not open a known tag
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];

        match after.find('>') {
            Some(end) if is_markup(&after[1..end]) => rest = &after[end + 1..],
            _ => {
                out.push('<');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_markup(tag: &str) -> bool {
    let name = tag.trim_start_matches('/');
    let name = name.split('=').next().unwrap_or("");
    MARKUP_TAGS.contains(&name)
}
