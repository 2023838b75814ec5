//! Discovery of the numbering convention already in force in a sibling set.

use crate::codec::{decimal_digits, leading_digits};
use crate::convention::Convention;

/// Infer the convention used by `names`, or `None` when the set is empty or
/// any name lacks a leading digit run.
///
/// - `prefix_min_length` is `0` when every digit run is exactly as wide as
///   the sibling count needs, otherwise the width of the first name's run.
/// - `delimiter` is the longest text shared by all names right after their
///   own digit run, grown one character at a time until the first mismatch
///   or the end of any name. It may be empty.
/// - `starting_index` is the smallest prefix value.
pub fn infer_convention<S: AsRef<str>>(names: &[S]) -> Option<Convention> {
    if names.is_empty() {
        return None;
    }

    let mut widths = Vec::with_capacity(names.len());
    let mut starting_index = u64::MAX;
    for name in names {
        let name = name.as_ref();
        let width = leading_digits(name);
        if width == 0 {
            return None;
        }
        let value = name[..width].parse::<u64>().ok()?;
        starting_index = starting_index.min(value);
        widths.push(width);
    }

    let count_width = decimal_digits(names.len());
    let prefix_min_length = if widths.iter().all(|w| *w == count_width) {
        0
    } else {
        widths[0]
    };

    let remainders: Vec<&str> = names
        .iter()
        .zip(&widths)
        .map(|(name, width)| &name.as_ref()[*width..])
        .collect();
    let delimiter = common_delimiter(&remainders);

    let convention = Convention::new(delimiter, prefix_min_length, starting_index);
    log::debug!("inferred convention for {} names: {}", names.len(), convention);
    Some(convention)
}

fn common_delimiter(remainders: &[&str]) -> String {
    let Some((first, rest)) = remainders.split_first() else {
        return String::new();
    };

    let mut end = 0;
    for (offset, c) in first.char_indices() {
        let next = offset + c.len_utf8();
        if !rest.iter().all(|r| r.get(offset..next) == Some(&first[offset..next])) {
            break;
        }
        end = next;
    }
    first[..end].to_string()
}
