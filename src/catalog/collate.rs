//! Name ordering for the alphabetical sort.
//!
//! Approximates a dictionary collation for Latin-script country names: letters
//! compare without case and accents first ("Åland" sorts with "A", "Curaçao"
//! before "Cyprus"), and the raw strings break ties.

use std::cmp::Ordering;

/// Compare two display names in dictionary order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Primary collation key: lowercase, accents folded, punctuation dropped.
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name.chars() {
        match fold(ch) {
            Folded::One(c) => key.push(c),
            Folded::Two(a, b) => {
                key.push(a);
                key.push(b);
            }
            Folded::Skip => {}
        }
    }
    key
}

enum Folded {
    One(char),
    Two(char, char),
    Skip,
}

fn fold(ch: char) -> Folded {
    let base = match ch {
        'À'..='Å' | 'à'..='å' | 'Ā' | 'ā' | 'Ă' | 'ă' | 'Ą' | 'ą' => 'a',
        'Ç' | 'ç' | 'Ć' | 'ć' | 'Č' | 'č' => 'c',
        'Ð' | 'ð' | 'Ď' | 'ď' | 'Đ' | 'đ' => 'd',
        'È'..='Ë' | 'è'..='ë' | 'Ē' | 'ē' | 'Ė' | 'ė' | 'Ę' | 'ę' | 'Ě' | 'ě' => 'e',
        'Ì'..='Ï' | 'ì'..='ï' | 'Ī' | 'ī' | 'Į' | 'į' | 'İ' | 'ı' => 'i',
        'Ñ' | 'ñ' | 'Ń' | 'ń' | 'Ň' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō' | 'ō' | 'Ő' | 'ő' => 'o',
        'Ù'..='Ü' | 'ù'..='ü' | 'Ū' | 'ū' | 'Ů' | 'ů' | 'Ű' | 'ű' => 'u',
        'Ý' | 'ý' | 'ÿ' | 'Ÿ' => 'y',
        'Ś' | 'ś' | 'Š' | 'š' | 'Ş' | 'ş' => 's',
        'Ź' | 'ź' | 'Ż' | 'ż' | 'Ž' | 'ž' => 'z',
        'Ł' | 'ł' => 'l',
        'Ř' | 'ř' => 'r',
        'Ť' | 'ť' | 'Ţ' | 'ţ' => 't',
        'Ğ' | 'ğ' => 'g',
        'Æ' | 'æ' => return Folded::Two('a', 'e'),
        'Œ' | 'œ' => return Folded::Two('o', 'e'),
        'ß' => return Folded::Two('s', 's'),
        'Þ' | 'þ' => return Folded::Two('t', 'h'),
        c if c.is_alphanumeric() => {
            let mut lower = c.to_lowercase();
            return match (lower.next(), lower.next()) {
                (Some(a), Some(b)) => Folded::Two(a, b),
                (Some(a), None) => Folded::One(a),
                _ => Folded::Skip,
            };
        }
        ' ' => ' ',
        _ => return Folded::Skip,
    };
    Folded::One(base)
}
