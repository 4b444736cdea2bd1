use log::warn;
use std::iter::Peekable;
use std::str::Chars;

pub(crate) fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Consumes the longest run of digits and decimal points and parses it.
///
/// The first character outside the run is left in `cursor`. A run that is not a
/// valid number, such as a lone `.`, yields `0.0`.
pub fn scan_number(cursor: &mut Peekable<Chars<'_>>) -> f64 {
    let mut text = String::new();
    while let Some(&c) = cursor.peek() {
        if !is_number_char(c) {
            break;
        }
        text.push(c);
        cursor.next();
    }

    text.parse::<f64>().unwrap_or_else(|_| {
        warn!("malformed number {text:?}, using 0");
        0.0
    })
}
