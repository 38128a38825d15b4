use anyhow::Context;
use std::{collections::HashSet, fs, path::Path};

/// Joins the syllables of a multi-syllable word so that downstream
/// vectorization sees it as one token.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> String;
}

pub const WORD_CONNECTOR: &str = "_";

/// Common multi-syllable Vietnamese words found in product reviews.
const BUILTIN_LEXICON: &[&str] = &[
    "sản phẩm",
    "hài lòng",
    "không hài lòng",
    "chất lượng",
    "giao hàng",
    "đóng gói",
    "nhân viên",
    "mọi người",
    "bình thường",
    "điện thoại",
    "điều khoản",
    "khách hàng",
    "cửa hàng",
    "dịch vụ",
    "giá cả",
    "giá tiền",
    "đáng tiền",
    "tuyệt vời",
    "thất vọng",
    "nhanh chóng",
    "cẩn thận",
    "nhiệt tình",
    "tư vấn",
    "ủng hộ",
    "thời gian",
    "hình ảnh",
    "màu sắc",
    "kích thước",
    "hàng hóa",
    "hàng giả",
    "sử dụng",
    "vận chuyển",
    "đơn hàng",
    "phản hồi",
    "bảo hành",
    "đổi trả",
    "chính hãng",
    "mua sắm",
    "lần sau",
    "cảm ơn",
    "xuất sắc",
    "tạm ổn",
    "kém chất lượng",
    "tiện lợi",
    "hướng dẫn",
    "việt nam",
    "chăm sóc",
    "yêu thích",
    "gì vậy",
];

/// Greedy longest-match segmenter over a lexicon of space-separated words.
pub struct LexiconSegmenter {
    lexicon: HashSet<String>,
    max_syllables: usize,
}

impl LexiconSegmenter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = Self {
            lexicon: HashSet::new(),
            max_syllables: 1,
        };
        segmenter.extend(words);
        segmenter
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_LEXICON)
    }

    /// Built-in lexicon extended with one word per line from `path`.
    pub fn with_lexicon_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon {}", path.display()))?;
        let mut segmenter = Self::builtin();
        segmenter.extend(contents.lines());
        tracing::info!(
            "Loaded segmenter lexicon from {} ({} entries)",
            path.display(),
            segmenter.len()
        );
        Ok(segmenter)
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let syllables: Vec<String> = word
                .as_ref()
                .split(|c: char| c.is_whitespace() || c == '_')
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect();
            if syllables.len() < 2 {
                continue;
            }
            self.max_syllables = self.max_syllables.max(syllables.len());
            self.lexicon.insert(syllables.join(" "));
        }
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Segmenter for LexiconSegmenter {
    fn segment(&self, text: &str) -> String {
        let syllables: Vec<&str> = text.split_whitespace().collect();
        let mut words: Vec<String> = Vec::with_capacity(syllables.len());
        let mut i = 0;

        while i < syllables.len() {
            let longest = (2..=self.max_syllables.min(syllables.len() - i))
                .rev()
                .find(|&n| {
                    let candidate = syllables[i..i + n].join(" ").to_lowercase();
                    self.lexicon.contains(&candidate)
                });

            match longest {
                Some(n) => {
                    words.push(syllables[i..i + n].join(WORD_CONNECTOR));
                    i += n;
                }
                None => {
                    words.push(syllables[i].to_string());
                    i += 1;
                }
            }
        }

        words.join(" ")
    }
}
