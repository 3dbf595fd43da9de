//! Identifier conventions for generated Rust code.
//!
//! Schema names arrive in whatever casing the schema author used. These
//! helpers map them onto Rust conventions and keep them valid identifiers.
//!
//! | Schema name | Function | Output |
//! |-------------|----------|--------|
//! | `displayName` | [`field_name`] | `display_name` |
//! | `user_profile` | [`type_name`] | `UserProfile` |
//! | `DarkBlue` | [`constant_name`] | `DARK_BLUE` |
//! | `type` | [`field_name`] | `r#type` |

/// Reserved words that cannot be used as bare identifiers
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "gen", "macro",
    "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Keywords that are not allowed as raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Convert any casing to PascalCase.
///
/// Word boundaries are `_`, `-`, `.` and spaces; existing capitals are kept.
///
/// ```
/// use wiregen_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("HTTPRequest"), "HTTPRequest");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_', '.', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert camelCase, PascalCase or kebab-case to snake_case.
///
/// Runs of capitals are treated as one word: `userID` becomes `user_id` and
/// `HTTPServer` becomes `http_server`.
///
/// ```
/// use wiregen_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("displayName"), "display_name");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '.' | ' ' | '_') {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    if result.ends_with('_') {
        result.pop();
    }
    result
}

/// Escape a Rust keyword so it can be used as an identifier
pub fn escape_keyword(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Struct field or getter name
pub fn field_name(name: &str) -> String {
    escape_keyword(&to_snake_case(name))
}

/// Struct, message or enum type name
pub fn type_name(name: &str) -> String {
    escape_keyword(&to_pascal_case(name))
}

/// Associated constant name for an enum member
pub fn constant_name(name: &str) -> String {
    let upper = to_snake_case(name).to_uppercase();
    if upper.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{upper}")
    } else {
        upper
    }
}

/// Module name for a schema namespace; dots collapse into underscores
pub fn module_name(namespace: &str) -> String {
    escape_keyword(&to_snake_case(namespace))
}
