//! Output ordering for listings.
//!
//! Records sort by name, then by GitHub reference, both compared with a
//! case-insensitive natural ordering where digit runs compare by magnitude
//! (`Site 2` before `Site 10`).

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::record::ListingRecord;

/// Sort records in place. Stable, so sorting sorted output is a no-op.
pub fn sort_records(records: &mut [ListingRecord]) {
    records.sort_by(compare_records);
}

pub fn compare_records(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    let name = |r: &ListingRecord| r.name.as_deref().unwrap_or_default().to_string();
    let github = |r: &ListingRecord| r.github.as_deref().unwrap_or_default().to_string();

    natural_cmp_ignore_case(&name(a), &name(b))
        .then_with(|| natural_cmp_ignore_case(&github(a), &github(b)))
}

pub fn natural_cmp_ignore_case(a: &str, b: &str) -> Ordering {
    natural_cmp(&a.to_lowercase(), &b.to_lowercase())
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            // Equal apart from zero padding: the shorter string goes first.
            (None, None) => return a.len().cmp(&b.len()),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let l = take_digits(&mut left);
                let r = take_digits(&mut right);
                let ord = compare_digit_runs(&l, &r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.cmp(&y);
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

/// Compare by magnitude only; padding is settled once the rest is equal.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');

    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}
