// src/macros.rs

/// String construction shorthand.
#[macro_export]
macro_rules! s {
    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-ish expressions into one String.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest.as_ref());
        )+
        s
    }};
}
