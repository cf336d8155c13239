// src/domain/revision/naming.rs
//! Naming conventions shared by relation lookup and field mutators.

/// `published_status` -> `publishedStatus`. The character after each
/// underscore is upper-cased and the underscore dropped.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// `published_status` -> `PublishedStatus`.
pub fn studly_case(input: &str) -> String {
    let camel = camel_case(input);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Accessor name a model uses to format a field: `status` -> `getStatusAttribute`.
pub fn accessor_name(field_key: &str) -> String {
    format!("get{}Attribute", studly_case(field_key))
}
