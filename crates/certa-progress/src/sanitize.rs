//! # Evidence Sanitization
//!
//! Canonical normalization every evidence write passes through. Rich-text
//! editors leave residue — control characters, non-breaking spaces, runs
//! of whitespace, and "empty" markup that is really a lone line break.
//! Sanitization collapses all of it so that "has evidence" is a meaningful
//! predicate and stored blobs stay stable across round trips.
//!
//! ## Invariant
//!
//! `sanitize_evidence` is idempotent: applying it to its own output
//! returns the output unchanged. Status derivation and the empty-evidence
//! checks all assume this.

/// Markup strings an empty rich-text editor produces instead of "".
const EMPTY_EDITOR_SENTINELS: [&str; 2] = ["<br>", "<div><br></div>"];

/// Whether a character is in the stripped control ranges
/// (U+0000–U+001F, U+007F–U+009F).
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Normalize raw evidence markup.
///
/// Strips control characters, maps non-breaking spaces to plain spaces,
/// collapses whitespace runs to single spaces, trims, and collapses the
/// known empty-editor sentinels to the empty string.
pub fn sanitize_evidence(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        let c = if c == '\u{00A0}' { ' ' } else { c };
        if is_stripped_control(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    if EMPTY_EDITOR_SENTINELS.contains(&out.as_str()) {
        return String::new();
    }
    out
}
