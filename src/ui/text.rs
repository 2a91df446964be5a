//! Text layout helpers for the card.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Center `s` in `width` columns by left-padding; wider text is returned as-is.
pub fn center(s: &str, width: usize) -> String {
    let len = visible_width(s);
    if len >= width {
        return s.to_string();
    }
    format!("{}{s}", " ".repeat((width - len) / 2))
}

/// Wrap a single line to fit `max_width`.
///
/// Prefers whitespace boundaries and falls back to hard wrapping long tokens.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + max_width).min(chars.len());
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = skip_whitespace(&chars, end);
            continue;
        }

        let split = (start + 1..end).rev().find(|&idx| chars[idx].is_whitespace());
        if let Some(split_idx) = split {
            out.push(chars[start..split_idx].iter().collect());
            start = skip_whitespace(&chars, split_idx);
            continue;
        }

        out.push(chars[start..end].iter().collect());
        start = end;
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Wrap multi-line text, keeping blank lines between paragraphs.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}
