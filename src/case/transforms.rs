//! Case conversion functions
//!
//! Every function here is pure and total: any input, including the empty
//! string, produces a value.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-_\s]+").expect("Failed to compile regex pattern for WORD_SEPARATORS")
});

static LOWER_UPPER_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z])([A-Z])").expect("Failed to compile regex pattern for LOWER_UPPER_BOUNDARY")
});

static DASH_OR_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-\s]+").expect("Failed to compile regex pattern for DASH_OR_SPACE")
});

static UNDERSCORE_OR_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[_\s]+").expect("Failed to compile regex pattern for UNDERSCORE_OR_SPACE")
});

fn upper_first_lower_rest(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// `my super-name` -> `MySuperName`
pub fn pascal_case(input: &str) -> String {
    WORD_SEPARATORS
        .split(input)
        .map(upper_first_lower_rest)
        .collect()
}

/// `my super-name` -> `mySuperName`
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `my super-name` -> `my_super_name`, `fooBar` -> `foo_bar`
pub fn snake_case(input: &str) -> String {
    let split = LOWER_UPPER_BOUNDARY.replace_all(input, "${1}_${2}");
    DASH_OR_SPACE.replace_all(&split, "_").to_lowercase()
}

/// `my super_name` -> `my-super-name`, `fooBar` -> `foo-bar`
pub fn kebab_case(input: &str) -> String {
    let split = LOWER_UPPER_BOUNDARY.replace_all(input, "${1}-${2}");
    UNDERSCORE_OR_SPACE.replace_all(&split, "-").to_lowercase()
}

/// `my super-name` -> `MY_SUPER_NAME`
pub fn screaming_snake_case(input: &str) -> String {
    snake_case(input).to_uppercase()
}

/// Uppercases the first character and leaves the rest untouched
pub fn upper_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// `my super-name` -> `MYSUPERNAME`
pub fn upper_case_all(input: &str) -> String {
    WORD_SEPARATORS.replace_all(input, "").to_uppercase()
}

/// `my super-name` -> `mysupername`
pub fn lower_case_all(input: &str) -> String {
    WORD_SEPARATORS.replace_all(input, "").to_lowercase()
}
