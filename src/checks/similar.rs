//! Suggestions for misspelled names, by edit distance.

/// Suggestions further away than this are not offered.
pub const MAXIMUM_DISTANCE: usize = 3;

/// Levenshtein distance between two strings, ignoring case.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a
        .to_lowercase()
        .chars()
        .collect();
    let b: Vec<char> = b
        .to_lowercase()
        .chars()
        .collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a
        .iter()
        .enumerate()
    {
        current[0] = i + 1;
        for (j, cb) in b
            .iter()
            .enumerate()
        {
            let substitution = previous[j] + if ca == cb { 0 } else { 1 };
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution
                .min(deletion)
                .min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// The candidate nearest to the query, if any is within
/// MAXIMUM_DISTANCE. When several are equally near, the first one in the
/// pool wins.
pub fn find_similar<'a, I, S>(query: &str, pool: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut best: Option<(&'a str, usize)> = None;

    for candidate in pool {
        let candidate: &'a str = S::as_ref(candidate);
        let d = distance(query, candidate);
        match best {
            Some((_, nearest)) if nearest <= d => {}
            _ => best = Some((candidate, d)),
        }
    }

    match best {
        Some((candidate, d)) if d <= MAXIMUM_DISTANCE => Some(candidate),
        _ => None,
    }
}
