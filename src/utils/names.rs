//! Author name abbreviation
//!
//! Citation style used throughout the CV: given names collapse to initials,
//! the last token is kept as the surname.

/// Abbreviate a full name to `<initials> <surname>`.
///
/// Hyphenated given names abbreviate per segment. Names with fewer than two
/// tokens are returned unchanged.
///
/// # Examples
/// ```
/// use cvgen::utils::abbreviate_name;
///
/// assert_eq!(abbreviate_name("Ho Won Lee"), "H.W. Lee");
/// assert_eq!(abbreviate_name("Dong-Kyu Kim"), "D.-K. Kim");
/// assert_eq!(abbreviate_name("Plato"), "Plato");
/// ```
pub fn abbreviate_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();

    let Some((surname, given)) = parts.split_last() else {
        return full_name.to_string();
    };
    if given.is_empty() {
        return full_name.to_string();
    }

    let initials: String = given.iter().map(|part| initials_for(part)).collect();
    format!("{} {}", initials, surname)
}

/// Initials for one given-name token (`Dong-Kyu` → `D.-K.`)
fn initials_for(part: &str) -> String {
    if part.contains('-') {
        part.split('-')
            .filter_map(initial)
            .collect::<Vec<_>>()
            .join("-")
    } else {
        initial(part).unwrap_or_default()
    }
}

/// Upper-cased first letter followed by a period
fn initial(word: &str) -> Option<String> {
    word.chars()
        .next()
        .map(|c| format!("{}.", c.to_uppercase()))
}

/// Tag used in the output file name: first initial plus surname.
///
/// # Examples
/// ```
/// use cvgen::utils::file_tag;
///
/// assert_eq!(file_tag("Ho Won Lee"), "HLee");
/// assert_eq!(file_tag("Plato"), "Plato");
/// ```
pub fn file_tag(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "CV".to_string(),
        [only] => only.to_string(),
        [first, .., last] => {
            let first_initial: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
            format!("{}{}", first_initial, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_multi_part() {
        assert_eq!(abbreviate_name("Ho Won Lee"), "H.W. Lee");
        assert_eq!(abbreviate_name("Jane Doe"), "J. Doe");
        assert_eq!(abbreviate_name("  Jane   Mary Doe "), "J.M. Doe");
    }

    #[test]
    fn test_abbreviate_hyphenated() {
        assert_eq!(abbreviate_name("Dong-Kyu Kim"), "D.-K. Kim");
        assert_eq!(abbreviate_name("Jean-Pierre Paul Sartre"), "J.-P.P. Sartre");
    }

    #[test]
    fn test_abbreviate_lowercase_given_name() {
        assert_eq!(abbreviate_name("ho won Lee"), "H.W. Lee");
    }

    #[test]
    fn test_abbreviate_dangling_hyphen() {
        assert_eq!(abbreviate_name("Dong- Kim"), "D. Kim");
    }

    #[test]
    fn test_single_token_unchanged() {
        assert_eq!(abbreviate_name("Plato"), "Plato");
        assert_eq!(abbreviate_name(""), "");
        assert_eq!(abbreviate_name(" Plato "), " Plato ");
    }

    #[test]
    fn test_file_tag() {
        assert_eq!(file_tag("Ho Won Lee"), "HLee");
        assert_eq!(file_tag("jane doe"), "Jdoe");
        assert_eq!(file_tag(""), "CV");
    }
}
