//! Deterministic part of comment normalization.
//!
//! [`clean_text`] lowercases, collapses repeated characters, strips emoji and
//! punctuation, and expands chat abbreviations. Translation runs before it and
//! word segmentation after it; both live in [`super::pipeline`].

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref EMOJI_PATTERN: Regex = Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2702}-\x{27B0}",   // dingbats
        r"\x{1F926}-\x{1F937}",
        r"\x{10000}-\x{10FFFF}",
        r"\x{200D}", // zero width joiner
        r"\x{2640}-\x{2642}",
        r"\x{2600}-\x{2B55}",
        r"\x{23CF}",
        r"\x{23E9}",
        r"\x{231A}",
        r"\x{3030}",
        r"\x{FE0F}", // variation selector
        "]+"
    ))
    .unwrap();
    static ref NON_WORD_PATTERN: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref ABBREVIATIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ko", "không");
        m.insert("kg", "không");
        m.insert("khong", "không");
        m.insert("k", "không");
        m.insert("kh", "không");
        m.insert("hok", "không");
        m.insert("cx", "cũng");
        m.insert("mik", "mình");
        m.insert("m", "mình");
        m.insert("mk", "mình");
        m.insert("mn", "mọi người");
        m.insert("bt", "bình thường");
        m.insert("nv", "nhân viên");
        m.insert("sp", "sản phẩm");
        m.insert("đc", "được");
        m.insert("dc", "được");
        m.insert("đk", "điều khoản");
        m.insert("đt", "điện thoại");
        m.insert("j", "gì");
        m.insert("z", "gì");
        m.insert("vs", "với");
        m.insert("lun", "luôn");
        m.insert("zậy", "gì vậy");
        m.insert("thik", "thích");
        m.insert("hum", "hôm");
        m.insert("wa", "qua");
        m.insert("bn", "bạn");
        m.insert("ok", "ổn");
        m
    };
}

/// Canonical expansion of a chat abbreviation, if the token is one.
pub fn expand_abbreviation(token: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(token).copied()
}

pub fn abbreviation_table() -> impl Iterator<Item = (&'static str, &'static str)> {
    ABBREVIATIONS.iter().map(|(k, v)| (*k, *v))
}

/// Replaces every maximal run of three or more identical characters with a
/// single occurrence. Runs of two are kept.
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            run += 1;
        }
        let keep = if run >= 3 { 1 } else { run };
        for _ in 0..keep {
            out.push(ch);
        }
    }

    out
}

pub fn strip_emoji(text: &str) -> String {
    EMOJI_PATTERN.replace_all(text, "").into_owned()
}

pub fn is_stripped_symbol(ch: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_PATTERN.is_match(ch.encode_utf8(&mut buf))
}

pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = collapse_repeats(&lowered);
    // Removing emoji can join two short runs into a long one ("aa😀aa").
    let without_emoji = collapse_repeats(&strip_emoji(&collapsed));
    let words_only = NON_WORD_PATTERN.replace_all(&without_emoji, " ");

    words_only
        .trim()
        .split_whitespace()
        .map(|word| expand_abbreviation(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
