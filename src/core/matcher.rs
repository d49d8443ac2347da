//! Subset-containment matching between letter profiles
//!
//! Both profiles keep their letters sorted and unique, so containment is a single
//! merge-style co-scan instead of a lookup per letter.

use super::profile::LetterProfile;
use super::query::Query;

/// Check whether `candidate` can be spelled from the letters of `query`
///
/// True iff every letter of `candidate` occurs in `query` at least as many times.
///
/// # Examples
/// ```
/// use letter_combinations::core::{LetterProfile, is_subset_profile};
///
/// let then = LetterProfile::new("then").unwrap();
/// let hen = LetterProfile::new("hen").unwrap();
/// let heel = LetterProfile::new("heel").unwrap();
///
/// assert!(is_subset_profile(&hen, &then));
/// assert!(!is_subset_profile(&heel, &then)); // needs two e's
/// ```
#[must_use]
pub fn is_subset_profile(candidate: &LetterProfile, query: &LetterProfile) -> bool {
    scan(candidate, query, None)
}

/// Check whether `candidate` matches a query, honoring its center letter
///
/// Applies the length pre-check before the letter scan.
#[must_use]
pub fn matches_query(candidate: &LetterProfile, query: &Query) -> bool {
    if candidate.len() > query.profile().len() {
        return false;
    }
    scan(candidate, query.profile(), query.center())
}

fn scan(candidate: &LetterProfile, query: &LetterProfile, center: Option<u8>) -> bool {
    let available = query.counts();
    let mut seen_center = center.is_none();
    let mut i = 0;

    for needed in candidate.counts() {
        if Some(needed.letter) == center {
            seen_center = true;
        }

        // Advance through the query until the letter turns up
        loop {
            let Some(have) = available.get(i) else {
                return false;
            };
            i += 1;

            if have.letter == needed.letter {
                if needed.count > have.count {
                    return false;
                }
                break;
            }
            if have.letter > needed.letter {
                return false;
            }
        }
    }

    seen_center
}
