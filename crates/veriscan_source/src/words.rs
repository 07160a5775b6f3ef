//! Whole-word keyword scanning over line text.
//!
//! Verilog identifiers are `[A-Za-z_$][A-Za-z0-9_$]*`, so a keyword match
//! only counts when it is not flanked by identifier bytes. Matching is byte
//! oriented; keywords are always ASCII.

/// Returns `true` if the byte can appear in a Verilog identifier.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Returns the byte offset of the first whole-word occurrence of `word`,
/// starting the search at `from`.
pub fn find_word_from(text: &str, word: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut search_start = from.min(text.len());
    while let Some(rel) = text.get(search_start..)?.find(word) {
        let at = search_start + rel;
        let before_ok = at == 0 || !is_ident_byte(bytes[at - 1]);
        let end = at + word.len();
        let after_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
        if before_ok && after_ok {
            return Some(at);
        }
        search_start = at + 1;
    }
    None
}

/// Returns the byte offset of the first whole-word occurrence of `word`.
pub fn find_word(text: &str, word: &str) -> Option<usize> {
    find_word_from(text, word, 0)
}

/// Returns `true` if `text` contains `word` as a whole word.
pub fn contains_word(text: &str, word: &str) -> bool {
    find_word(text, word).is_some()
}

/// Returns the byte offsets of every whole-word occurrence of `word`.
pub fn word_positions(text: &str, word: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(at) = find_word_from(text, word, from) {
        positions.push(at);
        from = at + word.len();
    }
    positions
}

/// Reads the identifier starting at `offset`, if any.
///
/// Returns the identifier slice, or `None` when the byte at `offset` cannot
/// start an identifier (digits cannot, despite being identifier bytes).
pub fn ident_at(text: &str, offset: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    let first = *bytes.get(offset)?;
    if !is_ident_byte(first) || first.is_ascii_digit() {
        return None;
    }
    let mut end = offset;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    Some(&text[offset..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_whole_word() {
        assert_eq!(find_word("wire w;", "wire"), Some(0));
        assert_eq!(find_word("  wire w;", "wire"), Some(2));
    }

    #[test]
    fn rejects_embedded_match() {
        // `endcase` must not match the word `case`
        assert_eq!(find_word("endcase", "case"), None);
        // `wires` must not match `wire`
        assert_eq!(find_word("wires w;", "wire"), None);
        assert_eq!(find_word("my_wire w;", "wire"), None);
    }

    #[test]
    fn dollar_is_identifier_byte() {
        assert!(is_ident_byte(b'$'));
        assert_eq!(find_word("$wire", "wire"), None);
    }

    #[test]
    fn finds_later_occurrence_after_embedded() {
        assert_eq!(find_word("endcase case", "case"), Some(8));
    }

    #[test]
    fn word_positions_all_matches() {
        let line = "input a, output b, input c";
        assert_eq!(word_positions(line, "input"), vec![0, 19]);
        assert_eq!(word_positions(line, "output"), vec![9]);
    }

    #[test]
    fn word_positions_empty_when_absent() {
        assert!(word_positions("assign y = a;", "wire").is_empty());
    }

    #[test]
    fn contains_word_boundaries() {
        assert!(contains_word("always @(posedge clk)", "always"));
        assert!(!contains_word("always_ff @(posedge clk)", "always"));
    }

    #[test]
    fn ident_at_reads_identifier() {
        assert_eq!(ident_at("counter = 0", 0), Some("counter"));
        assert_eq!(ident_at("a, b", 3), Some("b"));
    }

    #[test]
    fn ident_at_rejects_non_start() {
        assert_eq!(ident_at("123abc", 0), None);
        assert_eq!(ident_at("[3:0]", 0), None);
        assert_eq!(ident_at("abc", 5), None);
    }
}
