//! Pascal and camel casing of word lists.

/// Concatenate `parts` in PascalCase: each part lowercased, first letter up.
pub fn pascal(parts: &[&str]) -> String {
    parts.iter().map(|part| pascal_word(part)).collect()
}

/// Concatenate `parts` in camelCase: first part lowercased, rest Pascal.
pub fn camel(parts: &[&str]) -> String {
    match parts.split_first() {
        Some((first, rest)) => first.to_lowercase() + &pascal(rest),
        None => String::new(),
    }
}

fn pascal_word(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
