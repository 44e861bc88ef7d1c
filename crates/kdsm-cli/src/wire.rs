//! Embedded-key wire framing.
//!
//! When a message travels with its own key, the key is wrapped as
//!
//! ```text
//! [KDSM_KEY_START]<key>[KDSM_KEY_END]<ciphertext>
//! ```
//!
//! The framing is applied and stripped here, at the calling layer; the
//! codec never sees the markers. Generated keys draw from an alphabet
//! without square brackets, so a key can never contain a marker, but
//! ciphertext may; only the first end marker terminates the key.

/// Opening marker of an embedded key.
pub const KEY_START: &str = "[KDSM_KEY_START]";

/// Closing marker of an embedded key.
pub const KEY_END: &str = "[KDSM_KEY_END]";

/// Prefix a ciphertext with its embedded key.
pub fn embed_key(key: &str, ciphertext: &str) -> String {
    format!("{KEY_START}{key}{KEY_END}{ciphertext}")
}

/// Split a framed message into `(key, ciphertext)`.
///
/// Returns `None` when the message is not framed: no leading start
/// marker, or a start marker that is never closed. Unframed messages
/// are passed through to the codec untouched by the caller.
pub fn split_embedded_key(message: &str) -> Option<(&str, &str)> {
    let rest = message.strip_prefix(KEY_START)?;
    let end = rest.find(KEY_END)?;
    Some((&rest[..end], &rest[end + KEY_END.len()..]))
}
