//! Ordering and filtering rules for bucket object names.
//!
//! Gallery images are authored as numbered files (`1.jpg`, `2.jpg`,
//! `10.jpg`), so plain lexicographic order would interleave them. Digit
//! runs are compared by numeric value instead.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two object names, treating runs of ASCII digits as numbers.
///
/// Non-digit segments compare byte-wise. Digit runs with equal numeric
/// value but different zero padding order the shorter spelling first, so
/// the ordering is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = a.chars().peekable();
    let mut rhs = b.chars().peekable();

    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut lhs);
                    let run_b = take_digit_run(&mut rhs);
                    let ord = cmp_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    lhs.next();
                    rhs.next();
                }
            }
        }
    }
}

/// Objects whose name starts with a dot are bookkeeping artifacts (for
/// example the empty-folder placeholder) and never part of a gallery.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compares digit runs numerically without parsing, so arbitrarily long
/// runs cannot overflow.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let stripped_a = a.trim_start_matches('0');
    let stripped_b = b.trim_start_matches('0');
    match stripped_a.len().cmp(&stripped_b.len()) {
        Ordering::Equal => match stripped_a.cmp(stripped_b) {
            Ordering::Equal => a.len().cmp(&b.len()),
            other => other,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_sort_by_value() {
        let mut names = vec!["10.jpg", "2.jpg", "1.jpg"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["1.jpg", "2.jpg", "10.jpg"]);
    }

    #[test]
    fn mixed_names_sort_naturally() {
        let mut names = vec!["img12.png", "img2.png", "cover.jpg", "img1.png"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["cover.jpg", "img1.png", "img2.png", "img12.png"]);
    }

    #[test]
    fn zero_padding_orders_shorter_first() {
        assert_eq!(natural_cmp("1.jpg", "01.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("01.jpg", "01.jpg"), Ordering::Equal);
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        let small = "99999999999999999998.jpg";
        let big = "99999999999999999999.jpg";
        assert_eq!(natural_cmp(small, big), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_before_extension() {
        assert_eq!(natural_cmp("1.jpg", "1a.jpg"), Ordering::Less);
    }

    #[test]
    fn hidden_names_are_flagged() {
        assert!(is_hidden(".emptyFolderPlaceholder"));
        assert!(is_hidden(".DS_Store"));
        assert!(!is_hidden("1.jpg"));
    }
}
