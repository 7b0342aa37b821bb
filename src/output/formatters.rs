//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Human-readable outcome of a guess
///
/// # Examples
/// ```
/// use evil_hangman::output::formatters::describe_occurrences;
///
/// assert_eq!(describe_occurrences('e', 0), "Sorry, there are no e's");
/// assert_eq!(describe_occurrences('o', 1), "Yes, there is one o");
/// assert_eq!(describe_occurrences('o', 2), "Yes, there are 2 o's");
/// ```
#[must_use]
pub fn describe_occurrences(letter: char, occurrences: usize) -> String {
    match occurrences {
        0 => format!("Sorry, there are no {letter}'s"),
        1 => format!("Yes, there is one {letter}"),
        n => format!("Yes, there are {n} {letter}'s"),
    }
}

/// Guessed letters as a bracketed list, e.g. `[a, e, o]`
#[must_use]
pub fn format_guesses(guesses: &BTreeSet<char>) -> String {
    let letters: Vec<String> = guesses.iter().map(char::to_string).collect();
    format!("[{}]", letters.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_occurrences_wording() {
        assert_eq!(describe_occurrences('z', 0), "Sorry, there are no z's");
        assert_eq!(describe_occurrences('a', 1), "Yes, there is one a");
        assert_eq!(describe_occurrences('l', 3), "Yes, there are 3 l's");
    }

    #[test]
    fn format_guesses_sorted_list() {
        let guesses: BTreeSet<char> = ['o', 'a', 'e'].into_iter().collect();
        assert_eq!(format_guesses(&guesses), "[a, e, o]");
        assert_eq!(format_guesses(&BTreeSet::new()), "[]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 3), "░░░");
    }
}
