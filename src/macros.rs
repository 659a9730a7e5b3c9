// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand.
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate anything that derefs to &str.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// One sheet row from literals: `cells!["Site A", 10, 10, "", 4, 4, ""]`.
/// Empty strings become `Cell::Empty`.
#[macro_export]
macro_rules! cells {
    () => {
        ::std::vec::Vec::<$crate::core::Cell>::new()
    };
    ($($v:expr),+ $(,)?) => {
        vec![$($crate::core::Cell::from($v)),+]
    };
}
