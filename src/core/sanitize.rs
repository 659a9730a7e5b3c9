// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `normalize_ws` + Unicode uppercase ("câmeras" → "CÂMERAS").
pub fn upper_ws(s: &str) -> String {
    normalize_ws(s).to_uppercase()
}

/// Case-insensitive substring test, Unicode-aware.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// First run of ASCII digits in `s`, e.g. "FALTANDO 3" → 3.
pub fn first_uint(s: &str) -> Option<u32> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

