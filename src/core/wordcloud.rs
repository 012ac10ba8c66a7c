//! Word clouds: frequency counting and deterministic layout

use std::sync::OnceLock;

use regex::Regex;

use super::error::{CookbookError, Result};
use super::style::Rgb;

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "ever", "few", "for", "from", "further", "get", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
    "nor", "not", "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "since", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

const PALETTE: &[Rgb] = &[
    Rgb(68, 1, 84),
    Rgb(59, 82, 139),
    Rgb(33, 145, 140),
    Rgb(94, 201, 98),
    Rgb(253, 231, 37),
];

/// Layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordCloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: f32,
    pub max_font_size: Option<f32>,
    /// How strongly relative frequency drives font size, 0.0..=1.0
    pub relative_scaling: f32,
}

impl Default for WordCloudOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            max_words: 200,
            min_font_size: 4.0,
            max_font_size: None,
            relative_scaling: 0.5,
        }
    }
}

/// A word positioned on the canvas; `x`/`y` is the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub frequency: f32,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

impl PlacedWord {
    fn overlaps(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x < self.x + self.width && self.x < x + w && y < self.y + self.height && self.y < y + h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    /// Count words in `text` and lay them out
    pub fn generate(text: &str, options: &WordCloudOptions) -> Result<Self> {
        let frequencies = word_frequencies(text);
        Self::from_frequencies(&frequencies, options)
    }

    /// Lay out pre-counted words, most frequent first
    pub fn from_frequencies(
        frequencies: &[(String, usize)],
        options: &WordCloudOptions,
    ) -> Result<Self> {
        let Some(max_count) = frequencies.iter().map(|(_, c)| *c).max() else {
            return Err(CookbookError::Render(
                "need at least one word to plot a word cloud".to_string(),
            ));
        };

        let mut ranked: Vec<(&str, f32)> = frequencies
            .iter()
            .map(|(w, c)| (w.as_str(), *c as f32 / max_count as f32))
            .collect();
        // Stable sort keeps first-seen order among equal frequencies.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(options.max_words);

        let width = options.width as f32;
        let height = options.height as f32;
        let mut font_size = options.max_font_size.unwrap_or(height * 0.45);
        let rs = options.relative_scaling;
        let mut last_freq = 1.0f32;
        let mut words: Vec<PlacedWord> = Vec::new();

        for (i, (word, freq)) in ranked.into_iter().enumerate() {
            if i > 0 && rs != 0.0 {
                font_size = (rs * (freq / last_freq) + (1.0 - rs)) * font_size;
                font_size = font_size.round();
            }
            if font_size < options.min_font_size {
                break;
            }

            let mut size = font_size;
            let spot = loop {
                let (w, h) = measure(word, size);
                if let Some((x, y)) = find_spot(&words, w, h, width, height) {
                    break Some((x, y, w, h));
                }
                size -= 1.0;
                if size < options.min_font_size {
                    break None;
                }
            };
            let Some((x, y, w, h)) = spot else {
                break;
            };

            words.push(PlacedWord {
                text: word.to_string(),
                frequency: freq,
                font_size: size,
                x,
                y,
                width: w,
                height: h,
                color: PALETTE[i % PALETTE.len()],
            });
            font_size = size;
            last_freq = freq;
        }

        Ok(Self {
            width: options.width,
            height: options.height,
            words,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Approximate rendered extent of `word` at `font_size`
fn measure(word: &str, font_size: f32) -> (f32, f32) {
    (word.chars().count() as f32 * font_size * 0.6, font_size * 1.2)
}

/// First free slot along a spiral out from the centre
fn find_spot(placed: &[PlacedWord], w: f32, h: f32, width: f32, height: f32) -> Option<(f32, f32)> {
    if w > width || h > height {
        return None;
    }
    let cx = width / 2.0;
    let cy = height / 2.0;
    let max_radius = (width * width + height * height).sqrt() / 2.0;
    let mut t = 0.0f32;

    loop {
        let r = 2.0 * t;
        if r > max_radius {
            return None;
        }
        let x = (cx + r * t.cos() - w / 2.0).round();
        let y = (cy + r * t.sin() - h / 2.0).round();
        let inside = x >= 0.0 && y >= 0.0 && x + w <= width && y + h <= height;
        if inside && !placed.iter().any(|p| p.overlaps(x, y, w, h)) {
            return Some((x, y));
        }
        t += 0.1;
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w[\w']+").expect("static regex"))
}

/// Count words case-insensitively, dropping stopwords and merging plurals.
///
/// Each entry carries the most common surface form of the word.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    // lowercase key -> (surface forms with counts, first-seen order)
    let mut groups: Vec<(String, Vec<(String, usize)>)> = Vec::new();

    for token in token_regex().find_iter(text).map(|m| m.as_str()) {
        let token = token.strip_suffix("'s").unwrap_or(token);
        if token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let key = token.to_lowercase();
        if STOPWORDS.contains(&key.as_str()) {
            continue;
        }
        let slot = match groups.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        let forms = &mut groups[slot].1;
        match forms.iter_mut().find(|(f, _)| f == token) {
            Some((_, n)) => *n += 1,
            None => forms.push((token.to_string(), 1)),
        }
    }

    // Fold "cats" into "cat" when both appear.
    let keys: Vec<String> = groups.iter().map(|(k, _)| k.clone()).collect();
    let mut merged: Vec<(String, Vec<(String, usize)>)> = Vec::new();
    for (key, forms) in groups {
        let singular = key
            .strip_suffix('s')
            .filter(|s| !key.ends_with("ss") && keys.iter().any(|k| k == *s));
        match singular {
            Some(s) => {
                if let Some((_, target)) = merged.iter_mut().find(|(k, _)| k == s) {
                    target.extend(forms);
                } else {
                    merged.push((s.to_string(), forms));
                }
            }
            None => match merged.iter_mut().find(|(k, _)| *k == key) {
                Some((_, target)) => {
                    // Singular seen after its plural: keep its forms first.
                    let plural_forms = std::mem::replace(target, forms);
                    target.extend(plural_forms);
                }
                None => merged.push((key, forms)),
            },
        }
    }

    merged
        .into_iter()
        .filter_map(|(_, forms)| {
            let total: usize = forms.iter().map(|(_, n)| n).sum();
            let mut best: Option<&(String, usize)> = None;
            for form in &forms {
                if best.map_or(true, |b| form.1 > b.1) {
                    best = Some(form);
                }
            }
            best.map(|(f, _)| (f.clone(), total))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOKBOOK_TEXT: &str = "Fun, fun, awesome, awesome, tubular, astounding, superb, \
                                 great, amazing, amazing, amazing, amazing";

    #[test]
    fn test_frequencies_fold_case() {
        let freqs = word_frequencies("Fun, fun, awesome, awesome");
        assert_eq!(
            freqs,
            vec![("Fun".to_string(), 2), ("awesome".to_string(), 2)]
        );
    }

    #[test]
    fn test_frequencies_drop_stopwords_and_short_tokens() {
        let freqs = word_frequencies("the cat and a dog, x y z");
        assert_eq!(freqs, vec![("cat".to_string(), 1), ("dog".to_string(), 1)]);
    }

    #[test]
    fn test_frequencies_merge_plurals_and_possessives() {
        let freqs = word_frequencies("cats cat cat's glass");
        assert_eq!(
            freqs,
            vec![("cat".to_string(), 3), ("glass".to_string(), 1)]
        );
    }

    #[test]
    fn test_short_phrase_always_yields_words() {
        let cloud =
            WordCloud::generate("Fun, fun, awesome, awesome", &WordCloudOptions::default())
                .unwrap();
        assert!(!cloud.is_empty());
        assert_eq!(cloud.words.len(), 2);
    }

    #[test]
    fn test_most_frequent_word_is_largest() {
        let cloud = WordCloud::generate(COOKBOOK_TEXT, &WordCloudOptions::default()).unwrap();
        assert_eq!(cloud.words[0].text, "amazing");
        assert_eq!(cloud.words[0].frequency, 1.0);
        assert!(cloud
            .words
            .iter()
            .skip(1)
            .all(|w| w.font_size <= cloud.words[0].font_size));
    }

    #[test]
    fn test_words_stay_inside_and_do_not_overlap() {
        let options = WordCloudOptions::default();
        let cloud = WordCloud::generate(COOKBOOK_TEXT, &options).unwrap();

        for (i, a) in cloud.words.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0);
            assert!(a.x + a.width <= options.width as f32);
            assert!(a.y + a.height <= options.height as f32);
            for b in cloud.words.iter().skip(i + 1) {
                assert!(!a.overlaps(b.x, b.y, b.width, b.height));
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let options = WordCloudOptions::default();
        assert_eq!(
            WordCloud::generate(COOKBOOK_TEXT, &options).unwrap(),
            WordCloud::generate(COOKBOOK_TEXT, &options).unwrap()
        );
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let err = WordCloud::generate("a the, of", &WordCloudOptions::default()).unwrap_err();
        assert!(matches!(err, CookbookError::Render(_)));
    }
}
