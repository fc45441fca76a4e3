//! Small integer helpers shared between puzzle solutions.

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, always non-negative. Zero if either input is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Least common multiple of every value, or `None` if there are none.
///
/// ```
/// use aoc_collections::numeric::lcm_all;
///
/// assert_eq!(lcm_all([4, 6, 10]), Some(60));
/// assert_eq!(lcm_all(Vec::new()), None);
/// ```
pub fn lcm_all<I>(values: I) -> Option<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().reduce(lcm)
}

/// Short human-readable magnitude: `999`, `12K`, `3M`, `4G`.
///
/// Each step divides by 1000 and truncates.
pub fn humanize(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let mut magnitude = value.unsigned_abs();
    for suffix in ["", "K", "M"] {
        if magnitude < 1000 {
            return format!("{sign}{magnitude}{suffix}");
        }
        magnitude /= 1000;
    }
    format!("{sign}{magnitude}G")
}

/// Visits every ordering of `values`, permuting the slice in place.
///
/// Uses Heap's algorithm: `visit` is called `n!` times, first with the slice
/// as given, and each later ordering differs from the previous one by a
/// single swap. The slice is left in the last visited order.
pub fn for_each_permutation<T, F>(values: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    let n = values.len();
    let mut counters = vec![0; n];

    visit(values);

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                values.swap(0, i);
            } else {
                values.swap(counters[i], i);
            }
            visit(values);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}
