//! Character classes shared by every matcher that cares about identifier
//! or number boundaries.

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || is_digit(c)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
