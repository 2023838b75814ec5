use std::cmp::Ordering;

/// Natural name ordering used whenever no explicit order has been chosen.
///
/// Digit runs compare by numeric value (`"2" < "10"`), letters compare
/// case-insensitively. Remaining ties are broken by digit-run length (fewer
/// leading zeros first) and finally by the raw bytes, so two names only
/// compare `Equal` when they are identical.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    natural_cmp(a, b).then_with(|| a.cmp(b))
}

/// Sort anything that exposes a name, in natural order.
pub fn sort_by_name<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_names(name(a), name(b)));
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ab = a.as_bytes();
    let bb = b.as_bytes();
    let (mut i, mut j) = (0usize, 0usize);

    while i < ab.len() && j < bb.len() {
        let ca = ab[i];
        let cb = bb[j];

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let a_run = scan_number(ab, i);
            let b_run = scan_number(bb, j);

            // Leading zeros don't count towards magnitude
            let a_sig = &ab[a_run.significant..a_run.end];
            let b_sig = &bb[b_run.significant..b_run.end];
            let ord = a_sig.len().cmp(&b_sig.len()).then_with(|| a_sig.cmp(b_sig));
            if ord != Ordering::Equal {
                return ord;
            }

            // Same value: the shorter spelling sorts first
            let ord = (a_run.end - i).cmp(&(b_run.end - j));
            if ord != Ordering::Equal {
                return ord;
            }

            i = a_run.end;
            j = b_run.end;
            continue;
        }

        let ord = ca.to_ascii_lowercase().cmp(&cb.to_ascii_lowercase());
        if ord != Ordering::Equal {
            return ord;
        }
        i += 1;
        j += 1;
    }

    (ab.len() - i).cmp(&(bb.len() - j))
}

struct DigitRun {
    significant: usize,
    end: usize,
}

fn scan_number(bytes: &[u8], start: usize) -> DigitRun {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut significant = start;
    while significant < end && bytes[significant] == b'0' {
        significant += 1;
    }
    DigitRun { significant, end }
}
