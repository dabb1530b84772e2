//! Universal-measure parsing in exact integer subunits.
//!
//! A measure is stored as an integer count of subunits, where the subunit is
//! a fraction of a point chosen by the caller (twips are 1/20 pt, half-point
//! sizes are 1/2 pt). Parsing works on an exact decimal representation of
//! the input, so repeated format/parse round-trips never drift the way
//! floating-point conversions would.

use phf::{Map, phf_map};

/// Subunits per point for twips lengths (OOXML `ST_TwipsMeasure`).
pub const TWIPS_PER_PT: u32 = 20;

/// Subunits per point for half-point lengths (OOXML `ST_HpsMeasure`).
pub const HALF_POINTS_PER_PT: u32 = 2;

/// Points per unit for each recognized suffix, as a `(num, den)` rational.
///
/// 1 in = 72 pt, 1 pc = 12 pt, 1 cm = 3600/127 pt, 1 mm = 360/127 pt.
static UNIT_RATIOS: Map<&'static str, (u32, u32)> = phf_map! {
    "pt" => (1, 1),
    "in" => (72, 1),
    "pc" => (12, 1),
    "cm" => (3600, 127),
    "mm" => (360, 127),
};

/// Fractional digits beyond this carry no information at any supported
/// subunit resolution.
const MAX_FRAC_DIGITS: usize = 9;

/// A signed decimal number split into sign, mantissa and scale, plus the
/// unparsed tail: `value = sign * mantissa / 10^scale`.
struct Decimal<'a> {
    negative: bool,
    mantissa: u64,
    scale: u32,
    rest: &'a str,
}

fn split_decimal(text: &str) -> Option<Decimal<'_>> {
    let text = text.trim();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let int_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let int_digits = &rest[..int_end];
    let mut tail = &rest[int_end..];

    let mut frac_digits = "";
    if let Some(after_dot) = tail.strip_prefix('.') {
        let frac_end = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        frac_digits = &after_dot[..frac_end.min(MAX_FRAC_DIGITS)];
        tail = &after_dot[frac_end..];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let int_part: u64 = if int_digits.is_empty() {
        0
    } else {
        atoi_simd::parse(int_digits.as_bytes()).ok()?
    };
    let frac_part: u64 = if frac_digits.is_empty() {
        0
    } else {
        atoi_simd::parse(frac_digits.as_bytes()).ok()?
    };

    let scale = frac_digits.len() as u32;
    let mantissa = int_part
        .checked_mul(10u64.pow(scale))?
        .checked_add(frac_part)?;

    Some(Decimal {
        negative,
        mantissa,
        scale,
        rest: tail.trim(),
    })
}

/// Round `mantissa * num / den` half away from zero, apply the sign and
/// saturate to the i32 range.
fn round_scaled(negative: bool, mantissa: u64, num: u128, den: u128) -> i32 {
    let scaled = mantissa as u128 * num;
    let rounded = (2 * scaled + den) / (2 * den);
    let magnitude = rounded.min(i32::MAX as u128 + 1) as i64;
    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse a textual length into `subunits_per_pt` subunits.
///
/// The text is a signed decimal number followed by an optional unit suffix
/// (`pt`, `in`, `pc`, `cm`, `mm`). A bare or unrecognized suffix means the
/// number is already a subunit count, which is how legacy grammars pass
/// pre-converted values. Malformed text yields `0` so one bad attribute
/// cannot sink the surrounding document.
///
/// # Examples
///
/// ```
/// use docprop::measure::{parse_measure, TWIPS_PER_PT};
///
/// assert_eq!(parse_measure("36pt", TWIPS_PER_PT), 720);
/// assert_eq!(parse_measure("1in", TWIPS_PER_PT), 1440);
/// assert_eq!(parse_measure("240", TWIPS_PER_PT), 240);
/// assert_eq!(parse_measure("bogus", TWIPS_PER_PT), 0);
/// ```
pub fn parse_measure(text: &str, subunits_per_pt: u32) -> i32 {
    let Some(decimal) = split_decimal(text) else {
        return 0;
    };
    let (num, den) = match UNIT_RATIOS.get(decimal.rest) {
        Some(&(num, den)) => (num as u128 * subunits_per_pt as u128, den as u128),
        // No unit, or one we do not recognize: the number is already in
        // subunits.
        None => (1, 1),
    };
    round_scaled(
        decimal.negative,
        decimal.mantissa,
        num,
        den * 10u128.pow(decimal.scale),
    )
}

/// Parse a percentage (`"50%"` → `50`), or `None` when the text is not a
/// well-formed percentage.
pub fn parse_percent(text: &str) -> Option<i32> {
    let body = text.trim().strip_suffix('%')?;
    let decimal = split_decimal(body)?;
    if !decimal.rest.is_empty() {
        return None;
    }
    Some(round_scaled(
        decimal.negative,
        decimal.mantissa,
        1,
        10u128.pow(decimal.scale),
    ))
}

/// Format a subunit count back to measure text.
///
/// When `subunits_per_pt` divides a power of ten the result is an exact
/// point length (`720` twips → `"36pt"`, `721` → `"36.05pt"`); otherwise the
/// bare subunit count is emitted, which parses back exactly under any
/// divisor.
pub fn format_measure(subunits: i32, subunits_per_pt: u32) -> String {
    let mut itoa_buf = itoa::Buffer::new();
    if subunits_per_pt == 0 {
        return itoa_buf.format(subunits).to_string();
    }

    let den = subunits_per_pt as u64;
    let mut pow = 1u64;
    let mut digits = 0usize;
    while pow % den != 0 && digits < 6 {
        pow *= 10;
        digits += 1;
    }
    if pow % den != 0 {
        // Divisor with prime factors other than 2 and 5; no finite decimal.
        return itoa_buf.format(subunits).to_string();
    }

    let scaled = u64::from(subunits.unsigned_abs()) * (pow / den);
    let int_part = scaled / pow;
    let mut frac = scaled % pow;

    let mut out = String::with_capacity(12);
    if subunits < 0 {
        out.push('-');
    }
    out.push_str(itoa_buf.format(int_part));
    if frac != 0 {
        let mut frac_digits = digits;
        while frac % 10 == 0 {
            frac /= 10;
            frac_digits -= 1;
        }
        out.push('.');
        let text = itoa_buf.format(frac);
        for _ in text.len()..frac_digits {
            out.push('0');
        }
        out.push_str(text);
    }
    out.push_str("pt");
    out
}
