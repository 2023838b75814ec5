//! Encoding and decoding of a single name against a numeric-prefix convention.
//!
//! A prefixed name has the shape `<digits><delimiter><bare title>`. The
//! delimiter is always matched as a literal substring, so delimiters such as
//! `". "` or `"("` carry no special meaning.

/// A name split into its numeric prefix and bare title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefixed<'a> {
    /// Numeric value of the digit run
    pub index: u64,
    /// Number of digits in the run, leading zeros included
    pub width: usize,
    /// Remainder after the digit run and the delimiter
    pub title: &'a str,
}

/// Split `name` into `(index, bare title)` if it starts with one or more
/// decimal digits immediately followed by `delimiter`.
///
/// The longest digit run that is followed by the delimiter wins, so a
/// delimiter that itself starts with a digit still parses.
pub fn parse_prefix<'a>(name: &'a str, delimiter: &str) -> Option<Prefixed<'a>> {
    let run = leading_digits(name);
    (1..=run).rev().find_map(|width| {
        let title = name[width..].strip_prefix(delimiter)?;
        let index = name[..width].parse::<u64>().ok()?;
        Some(Prefixed {
            index,
            width,
            title,
        })
    })
}

/// Recover the bare title of `name`. Names without a matching prefix are
/// returned unchanged.
pub fn strip_prefix<'a>(name: &'a str, delimiter: &str) -> &'a str {
    parse_prefix(name, delimiter).map_or(name, |prefixed| prefixed.title)
}

/// Render `index` padded with zeros to at least `width` digits, followed by
/// `delimiter` and `title`. Indices wider than `width` are never truncated.
pub fn format_name(title: &str, index: u64, delimiter: &str, width: usize) -> String {
    format!("{index:0width$}{delimiter}{title}")
}

/// Length in bytes of the leading ASCII digit run of `name`.
pub fn leading_digits(name: &str) -> usize {
    name.bytes().take_while(u8::is_ascii_digit).count()
}

/// Number of decimal digits needed to write `n` (`0` needs one digit).
pub fn decimal_digits(n: usize) -> usize {
    let mut n = n;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
