//! Recognition of system/group notification phrasing.
//!
//! Membership changes and other system events show up in exports as
//! header lines whose "author" is really a sentence (`Alice added Bob`,
//! `You changed this group's icon`). Phrases are matched as whole words,
//! case-insensitively. The bare membership verbs are also common in display
//! names (`Left Eye`), so they only count in event position: `<x> added <y>`,
//! `<x> removed <y>` and `<x> left`, written in lowercase as the export does.

/// English phrases used by the source application for system events.
pub const NOTIFICATION_PHRASES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "created this group",
    "joined using this group's invite link",
    "joined using an invite link",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "changed the group name",
    "deleted this group's icon",
    "changed their phone number",
    "changed the group settings",
    "security code changed",
    "security code with",
    "is now an admin",
    "are now an admin",
    "no longer an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
];

/// Returns `true` if `text` reads like a system notification.
///
/// `extra` adds caller-supplied phrases on top of [`NOTIFICATION_PHRASES`].
pub fn is_notification_text(text: &str, extra: &[String]) -> bool {
    if is_membership_event(text) {
        return true;
    }

    let haystack = text.replace('\u{2019}', "'").to_lowercase();

    NOTIFICATION_PHRASES
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .any(|phrase| contains_phrase(&haystack, &phrase.to_lowercase()))
}

/// `Alice added Bob`, `You removed Bob`, `Bob left`.
fn is_membership_event(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words.iter().enumerate().any(|(i, &word)| match word {
        "added" | "removed" => i > 0 && i < last,
        "left" => i > 0 && i == last,
        _ => false,
    })
}

/// Whole-word containment: the phrase must not be glued to letters or
/// digits on either side.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    haystack.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}
