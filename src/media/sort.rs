// SPDX-License-Identifier: MPL-2.0
//! Natural ordering of filenames.
//!
//! Embedded digit runs compare by numeric value (`2.png` before `10.png`),
//! letters compare without regard to case, and punctuation sorts before
//! digits which sort before letters.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Returns a naturally ordered copy of `names`.
///
/// The sort is stable: names that compare equal keep their relative order.
#[must_use]
pub fn sort_natural<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|name| name.as_ref().to_owned()).collect();
    sorted.sort_by(|a, b| compare_natural(a, b));
    sorted
}

/// Compares two strings using natural (numeric-aware, case-insensitive) order.
#[must_use]
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ord = compare_digit_runs(&l_run, &r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = char_key(l).cmp(&char_key(r));
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
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compares two digit runs by numeric value without parsing, so arbitrarily
/// long runs never overflow. Leading zeros do not change the value.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn char_key(c: char) -> (u8, char) {
    let class = if c.is_ascii_digit() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    };
    let folded = c.to_lowercase().next().unwrap_or(c);
    (class, folded)
}
