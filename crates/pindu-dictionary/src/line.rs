/// One tokenized resource line: `<lead> <key> [reading] /gloss/gloss/`.
///
/// The key is the second whitespace-delimited field by contract
/// (simplified form in CC-CEDICT); everything before it is the lead
/// field (traditional form), and the bracketed pinyin field between
/// key and gloss block is captured when present.
#[derive(Debug, PartialEq)]
pub struct EntryLine<'a> {
    pub lead: &'a str,
    pub key: &'a str,
    pub reading: Option<&'a str>,
    pub gloss_lines: Vec<&'a str>,
}

/// Tokenize one line of the dictionary resource.
///
/// Returns `None` for malformed lines (no space before the key, no key
/// terminator, empty key, no gloss block); callers skip those.
pub fn parse_line(line: &str) -> Option<EntryLine<'_>> {
    let first_space = line.find(' ')?;
    let lead = &line[..first_space];
    let rest = &line[first_space + 1..];
    let key_end = rest.find(' ')?;
    let key = &rest[..key_end];
    if key.is_empty() {
        return None;
    }

    let slash = line.find('/')?;
    let middle = line.get(first_space + 1 + key_end..slash).unwrap_or("");
    let reading = middle.find('[').and_then(|open| {
        let tail = &middle[open + 1..];
        tail.find(']').map(|close| &tail[..close])
    });

    // The gloss block runs from the first `/` to the line's last
    // character exclusive, dropping the trailing `/` or terminator.
    let region = &line[slash..];
    let last = region.chars().last()?;
    let region = &region[..region.len() - last.len_utf8()];

    let mut gloss_lines: Vec<&str> = region.split('/').collect();
    while gloss_lines.first().is_some_and(|g| g.is_empty()) {
        gloss_lines.remove(0);
    }
    while gloss_lines.last().is_some_and(|g| g.is_empty()) {
        gloss_lines.pop();
    }

    Some(EntryLine {
        lead,
        key,
        reading,
        gloss_lines,
    })
}
