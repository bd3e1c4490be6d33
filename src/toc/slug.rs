//! Heading text to URL fragment.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, stripped after decomposition.
const DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Convert heading text to an anchor candidate.
///
/// Steps, in order:
/// 1. lowercase and trim
/// 2. NFKD, drop diacritics, recompose (`Élan` → `elan`, `ガ` stays `ガ`)
/// 3. drop everything but word characters, whitespace and `-`
/// 4. whitespace runs → `-`, then `-` runs → `-`
///
/// The result can be empty; see [`super::assign_anchors`] for the fallback.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded: String = lowered
        .trim()
        .nfkd()
        .filter(|c| !DIACRITICS.contains(c))
        .nfc()
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut in_space = false;
    for c in folded.chars() {
        if c.is_whitespace() {
            in_space = true;
            continue;
        }
        if !is_word_char(c) && c != '-' {
            continue;
        }
        if in_space {
            push_hyphen(&mut slug);
            in_space = false;
        }
        if c == '-' {
            push_hyphen(&mut slug);
        } else {
            slug.push(c);
        }
    }
    // Trailing whitespace was trimmed, but removed symbols can leave a run
    if in_space {
        push_hyphen(&mut slug);
    }
    slug
}

/// Letters, digits, marks and `_`, in any script, so kana and kanji survive.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_mark(c)
}

fn is_mark(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}
