//! # String permutations
//!
//! All orderings of the characters of a string, generated by fixing one position at a time: each
//! of the remaining characters is swapped into the position, the rest is permuted recursively and
//! the swap is undone.
use itertools::Itertools;

/// Every ordering of the characters of `text`.
///
/// Characters are Unicode scalar values. Repeated characters lead to repeated permutations, see
/// `distinct_permutations`. The empty string has one permutation, itself.
///
/// The number of results grows as `text.chars().count()!`, see `permutation_count`.
///
/// # Return value
///
/// For `"ABC"`: `ABC`, `ACB`, `BAC`, `BCA`, `CBA`, `CAB`.
pub fn permutations(text: &str) -> Vec<String> {
    let mut characters = text.chars().collect::<Vec<_>>();
    let mut result = Vec::new();
    permute(&mut characters, 0, &mut result);

    result
}

/// Every ordering of the characters of `text`, each listed once.
///
/// Same order as `permutations`, keeping the first occurrence of each.
pub fn distinct_permutations(text: &str) -> Vec<String> {
    permutations(text).into_iter().unique().collect()
}

/// Number of permutations of `len` distinct items, `None` if it doesn't fit in a `u128`.
pub fn permutation_count(len: usize) -> Option<u128> {
    (1..=len as u128).try_fold(1_u128, |product, factor| product.checked_mul(factor))
}

fn permute(characters: &mut [char], fixed: usize, result: &mut Vec<String>) {
    if fixed + 1 >= characters.len() {
        result.push(characters.iter().collect());
        return;
    }

    for i in fixed..characters.len() {
        characters.swap(fixed, i);
        permute(characters, fixed + 1, result);
        characters.swap(fixed, i);
    }
}
