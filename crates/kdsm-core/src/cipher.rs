//! Encoder and decoder transforms.
//!
//! Both directions are pure functions of (text, seed) and operate on
//! Unicode code points, never UTF-16 units or bytes, so characters
//! outside the Basic Multilingual Plane move through reversal and
//! indexed shifts as single units.
//!
//! # Character classes
//!
//! Each code point is transformed according to its class, checked in
//! this order:
//!
//! 1. Backslash, pipe, and URL-reserved punctuation: tagged into the
//!    `300+` marker band
//! 2. Printable ASCII (32..=126): shifted by `a + i*b` and wrapped back
//!    into the printable range by an iterative subtract-and-offset loop
//! 3. Tab, LF, CR: tagged into the `200+` marker band
//! 4. Everything else: XORed with `shift mod 100`
//!
//! The decoder checks the marker bands before the printable range; that
//! order is what keeps marked characters from being mistaken for
//! shifted ones, and it must not be rearranged.
//!
//! # Known lossy band
//!
//! Code points in `[128, 511]`, along with non-whitespace control
//! characters and DEL, take the XOR branch but can land inside a marker
//! band or the printable range, where the decoder classifies them
//! differently. The behavior is kept bit-for-bit for compatibility with
//! existing payloads; see `marker_collision_is_lossy` below.

/// Lower bound of the printable ASCII class.
const PRINTABLE_MIN: u32 = 32;

/// Upper bound of the printable ASCII class.
const PRINTABLE_MAX: u32 = 126;

/// Marker offset for tab, LF, and CR.
const CONTROL_MARKER_BASE: u32 = 200;

/// Upper bound of the control marker band (200 + CR).
const CONTROL_MARKER_MAX: u32 = 213;

/// Marker offset for backslash, pipe, and reserved punctuation.
const RESERVED_MARKER_BASE: u32 = 300;

/// Upper bound of the reserved marker band (300 + the highest printable
/// code point). The decoder must treat values above this as XOR output,
/// not markers.
const RESERVED_MARKER_MAX: u32 = 426;

/// Modulus applied to the shift before XORing non-ASCII code points.
const XOR_MASK_MOD: i64 = 100;

/// Position-dependent shift amounts derived from a seed.
///
/// `shift(i) = a + i*b` where `a = seed mod 97` and `b = seed mod 11`.
/// The shift grows without bound for long inputs; the wrap loops below
/// are written to absorb arbitrarily large shifts.
#[derive(Debug, Clone, Copy)]
pub struct ShiftSchedule {
    base: i64,
    step: i64,
}

impl ShiftSchedule {
    /// Derive the schedule for a seed.
    pub fn new(seed: u32) -> Self {
        Self { base: i64::from(seed % 97), step: i64::from(seed % 11) }
    }

    /// Shift amount for the code point at `index`.
    pub fn shift_at(&self, index: usize) -> i64 {
        self.base + index as i64 * self.step
    }
}

/// Encode a message under a seed.
///
/// Returns the empty string for an empty message. Never fails: every
/// branch produces a valid Unicode scalar value (markers stay below the
/// surrogate range, the wrap loop lands in the printable range, and the
/// XOR mask is under 128 so it only perturbs the low seven bits of a
/// code point, which cannot cross the 128-aligned surrogate block).
pub fn encode_with_seed(message: &str, seed: u32) -> String {
    if message.is_empty() {
        return String::new();
    }

    let schedule = ShiftSchedule::new(seed);
    let mut out: Vec<char> = Vec::with_capacity(message.len());

    for (i, ch) in message.chars().enumerate() {
        let code = u32::from(ch);
        let shift = schedule.shift_at(i);

        let encoded = if ch == '\\' || ch == '|' || is_reserved_punctuation(ch) {
            RESERVED_MARKER_BASE + code
        } else if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&code) {
            wrap_into_printable(i64::from(code) + shift)
        } else if code == 9 || code == 10 || code == 13 {
            CONTROL_MARKER_BASE + code
        } else {
            code ^ xor_mask(shift)
        };

        out.push(scalar(encoded));
    }

    out.reverse();
    transpose_pair(&mut out);
    out.into_iter().collect()
}

/// Decode a ciphertext under a seed.
///
/// Exact structural inverse of [`encode_with_seed`]: the transposition
/// and reversal are undone first, then each code point is classified by
/// its encoded value and mapped back. Returns the empty string for an
/// empty ciphertext and never fails on any input string.
///
/// A mismatched seed does not error; it yields a different string. The
/// scheme carries no integrity check, so callers cannot detect a wrong
/// key from the decoder alone.
pub fn decode_with_seed(ciphertext: &str, seed: u32) -> String {
    if ciphertext.is_empty() {
        return String::new();
    }

    let schedule = ShiftSchedule::new(seed);
    let mut chars: Vec<char> = ciphertext.chars().collect();

    transpose_pair(&mut chars);
    chars.reverse();

    let mut out = String::with_capacity(ciphertext.len());

    for (i, &ch) in chars.iter().enumerate() {
        let code = u32::from(ch);
        let shift = schedule.shift_at(i);

        // Marker bands take precedence over the printable range.
        let decoded = if (RESERVED_MARKER_BASE..=RESERVED_MARKER_MAX).contains(&code) {
            code - RESERVED_MARKER_BASE
        } else if (CONTROL_MARKER_BASE..=CONTROL_MARKER_MAX).contains(&code) {
            code - CONTROL_MARKER_BASE
        } else if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&code) {
            unwrap_from_printable(i64::from(code) - shift)
        } else {
            code ^ xor_mask(shift)
        };

        out.push(scalar(decoded));
    }

    out
}

/// URL-reserved punctuation that must survive the shift step unchanged.
fn is_reserved_punctuation(ch: char) -> bool {
    matches!(
        ch,
        ':' | '/'
            | '?'
            | '#'
            | '['
            | ']'
            | '@'
            | '!'
            | '$'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | ';'
            | '='
            | '-'
            | '.'
            | '_'
            | '~'
            | '%'
    )
}

/// Wrap a shifted code back into `[32, 126]`.
///
/// Not a plain modulo: the loop subtracts one period (95) per pass and
/// must repeat when the shift spans several periods, which it does for
/// positions deep into a long message.
fn wrap_into_printable(mut code: i64) -> u32 {
    while code > i64::from(PRINTABLE_MAX) {
        code = 31 + (code - i64::from(PRINTABLE_MAX));
    }
    code as u32
}

/// Inverse of [`wrap_into_printable`]: lift an unshifted code back into
/// `[32, 126]` one period at a time.
fn unwrap_from_printable(mut code: i64) -> u32 {
    while code < i64::from(PRINTABLE_MIN) {
        code = 127 - (i64::from(PRINTABLE_MIN) - code);
    }
    code as u32
}

fn xor_mask(shift: i64) -> u32 {
    (shift % XOR_MASK_MOD) as u32
}

/// Swap the code points at positions 2 and 3. Self-inverse, applied
/// after reversal on encode and before un-reversal on decode.
fn transpose_pair(chars: &mut [char]) {
    if chars.len() >= 4 {
        chars.swap(2, 3);
    }
}

fn scalar(code: u32) -> char {
    let Some(ch) = char::from_u32(code) else {
        unreachable!(
            "marker and wrap outputs stay below the surrogate range, and the XOR mask \
             only touches the low seven bits of a scalar value"
        );
    };
    ch
}
