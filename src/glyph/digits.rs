//! Digit-sequence transforms

/// A maximal run of equal adjacent digits.
///
/// `occurrence` is the run length minus one, so it is always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsecutiveRun {
    pub digit: u8,
    pub occurrence: usize,
}

/// Split the decimal characters of `value` into digits, left to right.
///
/// Characters that are not decimal digits are skipped; sanitizing user
/// text is the caller's job.
pub fn split_digits(value: &str) -> Vec<u8> {
    value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// Collapse runs of equal adjacent elements to a single element.
pub fn collapse_adjacent_duplicates<T: PartialEq + Copy>(seq: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(seq.len());
    for &item in seq {
        if out.last() != Some(&item) {
            out.push(item);
        }
    }
    out
}

/// Every maximal run of length >= 2, in the order found scanning from the
/// end of the sequence toward the start.
pub fn consecutive_runs(seq: &[u8]) -> Vec<ConsecutiveRun> {
    let mut runs = Vec::new();
    let mut current: Option<ConsecutiveRun> = None;

    let mut reversed = seq.iter().rev().peekable();
    while let Some(&digit) = reversed.next() {
        if reversed.peek() == Some(&&digit) {
            current
                .get_or_insert(ConsecutiveRun {
                    digit,
                    occurrence: 0,
                })
                .occurrence += 1;
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(digit: u8, occurrence: usize) -> ConsecutiveRun {
        ConsecutiveRun { digit, occurrence }
    }

    #[test]
    fn test_split_digits() {
        assert_eq!(split_digits("1234"), vec![1, 2, 3, 4]);
        assert_eq!(split_digits("0907"), vec![0, 9, 0, 7]);
        assert_eq!(split_digits(""), Vec::<u8>::new());
        assert_eq!(split_digits("1 2-3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_collapse_adjacent_duplicates() {
        assert_eq!(
            collapse_adjacent_duplicates(&['a', 'a', 'b', 'b', 'b', 'c']),
            vec!['a', 'b', 'c']
        );
        assert_eq!(collapse_adjacent_duplicates::<u8>(&[]), Vec::<u8>::new());
        assert_eq!(collapse_adjacent_duplicates(&[7]), vec![7]);
        // Only adjacent duplicates collapse
        assert_eq!(collapse_adjacent_duplicates(&[1, 2, 1, 1]), vec![1, 2, 1]);
    }

    #[test]
    fn test_consecutive_runs() {
        assert_eq!(consecutive_runs(&[1, 2, 2, 3]), vec![run(2, 1)]);
        assert_eq!(consecutive_runs(&[1, 1, 1, 1]), vec![run(1, 3)]);
        assert!(consecutive_runs(&[1, 2, 3, 4]).is_empty());
        assert_eq!(consecutive_runs(&[1, 1, 1, 9]), vec![run(1, 2)]);
        assert!(consecutive_runs(&[]).is_empty());
        assert!(consecutive_runs(&[5]).is_empty());
    }

    #[test]
    fn test_consecutive_runs_are_ordered_from_the_tail() {
        assert_eq!(consecutive_runs(&[1, 1, 2, 2]), vec![run(2, 1), run(1, 1)]);
        assert_eq!(consecutive_runs(&[3, 3, 3, 4, 5, 5]), vec![run(5, 1), run(3, 2)]);
    }

    #[test]
    fn test_consecutive_runs_of_the_same_digit_stay_separate() {
        assert_eq!(consecutive_runs(&[4, 4, 1, 4, 4]), vec![run(4, 1), run(4, 1)]);
    }
}
