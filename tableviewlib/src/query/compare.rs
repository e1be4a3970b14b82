//! Ordering of field values for the sort stage.

use std::cmp::Ordering;

use crate::data::value::Value;

use super::options::SortDirection;

/// Compare two field values under a sort direction.
///
/// - two numbers compare numerically
/// - two strings compare lexically: case-insensitive first, and on a
///   case-only difference lowercase sorts before uppercase
/// - anything else (mixed types, null, absent, booleans) compares equal
///
/// `Descending` reverses the result. `None` always yields `Equal`; the
/// pipeline skips sorting altogether for it.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Text(x), Value::Text(y)) => compare_text(x, y),
        _ => Ordering::Equal,
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
        SortDirection::None => Ordering::Equal,
    }
}

/// Lexical comparison that groups case variants together ("apple" < "Banana").
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| {
        let upper_a = a.chars().map(char::is_uppercase);
        let upper_b = b.chars().map(char::is_uppercase);
        upper_a.cmp(upper_b)
    })
}

/// Stable merge sort.
///
/// `compare_values` is not transitive across mixed types (`1 == "x" == 2`
/// while `1 < 2`), so this must not rely on the comparator being a total
/// order. It never panics and never moves a later element ahead of an
/// earlier one it compares equal to.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut scratch = Vec::with_capacity(items.len());
    merge_sort(items, &mut scratch, &mut compare);
}

const INSERTION_THRESHOLD: usize = 16;

fn merge_sort<T, F>(items: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort(items, compare);
        return;
    }

    let mid = len / 2;
    merge_sort(&mut items[..mid], scratch, compare);
    merge_sort(&mut items[mid..], scratch, compare);

    scratch.clear();
    let (mut left, mut right) = (0, mid);
    while left < mid && right < len {
        // Take from the right half only when strictly smaller.
        if compare(&items[right], &items[left]) == Ordering::Less {
            scratch.push(items[right]);
            right += 1;
        } else {
            scratch.push(items[left]);
            left += 1;
        }
    }
    scratch.extend_from_slice(&items[left..mid]);
    scratch.extend_from_slice(&items[right..]);
    items.copy_from_slice(scratch);
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
