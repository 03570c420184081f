//! Character classification helpers shared by the normalization stages.

/// Full-width ASCII block (`！`..`～`) or the ideographic space.
#[inline(always)]
pub fn is_fullwidth(c: char) -> bool {
    let cp = c as u32;
    (0xFF01..=0xFF5E).contains(&cp) || cp == 0x3000
}

#[inline(always)]
pub fn fullwidth_to_halfwidth(c: char) -> char {
    let cp = c as u32;
    if (0xFF01..=0xFF5E).contains(&cp) {
        char::from_u32(cp - 0xFEE0).unwrap_or(c)
    } else if cp == 0x3000 {
        ' '
    } else {
        c
    }
}

/// C0 and C1 control characters (General Category `Cc`).
#[inline(always)]
pub fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Simple (one-to-one) Unicode lower-case mapping.
///
/// `char::to_lowercase` applies the full mapping, where `İ` becomes two
/// characters. The simple mapping keeps the first one, so a word never
/// changes length when lower-cased.
#[inline(always)]
pub fn simple_lowercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// True when lower-casing `c` yields something other than `c` itself.
#[inline(always)]
pub fn needs_lowercase(c: char) -> bool {
    simple_lowercase(c) != c
}

/// Lower-cases `s` character by character with [`simple_lowercase`].
///
/// Unlike `str::to_lowercase` there is no final-sigma context either: `Σ`
/// always maps to `σ`.
pub fn to_lowercase_simple(s: &str) -> String {
    s.chars().map(simple_lowercase).collect()
}
