//! Bean-style accessor naming.
//!
//! Pure string transforms. Capitalisation only touches an ASCII letter in
//! the first position; anything else (digits, `_`, `$`, non-ASCII) is kept
//! as written. A bare prefix such as `get` or `set` is a plain name.

pub const GETTER_PREFIX: &str = "get";
pub const SETTER_PREFIX: &str = "set";
pub const BOOLEAN_GETTER_PREFIX: &str = "is";

/// `getFoo`-shaped: starts with `get` and has something after it.
pub fn is_getter_name(name: &str) -> bool {
    name.len() > GETTER_PREFIX.len() && name.starts_with(GETTER_PREFIX)
}

/// `setFoo`-shaped: starts with `set` and has something after it.
pub fn is_setter_name(name: &str) -> bool {
    name.len() > SETTER_PREFIX.len() && name.starts_with(SETTER_PREFIX)
}

/// `isFoo`-shaped. Unlike `get`/`set`, the prefix must be followed by an
/// upper-case letter so that `island` or `issue` stay plain names.
pub fn is_boolean_getter_name(name: &str) -> bool {
    name.strip_prefix(BOOLEAN_GETTER_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Property base name of a getter-shaped name: `getFoo` -> `foo`.
/// Any other name is returned unchanged.
pub fn to_base_name(name: &str) -> String {
    if is_getter_name(name) {
        decapitalize(&name[GETTER_PREFIX.len()..])
    } else {
        name.to_string()
    }
}

/// `foo` -> `getFoo`; `x` -> `getX`; `` -> `get`.
pub fn to_getter_name(base: &str) -> String {
    format!("{}{}", GETTER_PREFIX, capitalize(base))
}

/// `foo` -> `setFoo`; `x` -> `setX`; `` -> `set`.
pub fn to_setter_name(base: &str) -> String {
    format!("{}{}", SETTER_PREFIX, capitalize(base))
}

pub fn to_boolean_getter_name(base: &str) -> String {
    format!("{}{}", BOOLEAN_GETTER_PREFIX, capitalize(base))
}

/// Getter names `name` could be sugar for.
///
/// An accessor-shaped getter name stands for itself; a bare property name
/// yields its `get` and `is` forms.
pub fn suggest_getter_names(name: &str) -> Vec<String> {
    if name.is_empty() {
        return vec![];
    }
    if is_getter_name(name) || is_boolean_getter_name(name) {
        return vec![name.to_string()];
    }
    vec![to_getter_name(name), to_boolean_getter_name(name)]
}

/// Setter names `name` could be sugar for.
///
/// A setter name stands for itself, a getter name maps to its paired
/// setter, and a bare property name yields its `set` form.
pub fn suggest_setter_names(name: &str) -> Vec<String> {
    if name.is_empty() {
        return vec![];
    }
    if is_setter_name(name) {
        return vec![name.to_string()];
    }
    if is_getter_name(name) {
        return vec![format!("{}{}", SETTER_PREFIX, &name[GETTER_PREFIX.len()..])];
    }
    if is_boolean_getter_name(name) {
        return vec![format!("{}{}", SETTER_PREFIX, &name[BOOLEAN_GETTER_PREFIX.len()..])];
    }
    vec![to_setter_name(name)]
}
