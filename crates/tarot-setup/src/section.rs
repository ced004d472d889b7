//! Markdown section replacement for persona documents.

/// ATX heading level of a line (`## Title` is 2), if it is a heading.
pub fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes)
    } else {
        None
    }
}

/// `line` is `heading` itself or `heading` followed by whitespace.
fn titled(line: &str, heading: &str) -> bool {
    line.strip_prefix(heading)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Replace the section titled `heading` (optionally followed by a subtitle), or append it.
///
/// The replaced span runs from the matching heading up to (not including) the
/// next heading of the same or a higher level, or to the end of the document.
/// `section` should begin with its own heading so repeated application is
/// idempotent.
pub fn replace_section(doc: &str, heading: &str, section: &str) -> String {
    let section = section.trim();
    let level = heading_level(heading).unwrap_or(2);
    let lines: Vec<&str> = doc.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|l| heading_level(l) == Some(level) && titled(l, heading))
    else {
        let mut out = doc.trim_end().to_string();
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(section);
        out.push('\n');
        return out;
    };

    let end = lines[start + 1..]
        .iter()
        .position(|l| heading_level(l).is_some_and(|lv| lv <= level))
        .map_or(lines.len(), |offset| start + 1 + offset);

    let mut out: Vec<&str> = lines[..start].to_vec();
    out.push(section);
    if end < lines.len() {
        out.push("");
        out.extend_from_slice(&lines[end..]);
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}
