// src/services/wordcloud.rs
// DOCUMENTATION: Word cloud from review text
// PURPOSE: Count words, lay them out on a spiral, rasterize a fixed-size PNG

use crate::config::Config;
use crate::errors::AnalyzerError;
use crate::models::{ReviewRecord, WordCloudArtifact};
use image::{imageops, DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use regex::Regex;
use rusttype::{point, Font, Scale};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;

/// Words of two or more characters, apostrophes allowed inside
const TOKEN_PATTERN: &str = r"\w[\w']+";

const FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Archimedean spiral: pixels of radius gained per radian
const SPIRAL_SPACING: f32 = 3.0;
/// Approximate arc length between two sample points on the spiral
const SPIRAL_STEP_PX: f32 = 5.0;
const WORD_PADDING: f32 = 2.0;

/// viridis
const PALETTE: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// All review bodies joined by a single space, original order
pub fn join_review_text(reviews: &[ReviewRecord]) -> String {
    reviews
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns review text into an image
pub trait WordCloudRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<WordCloudArtifact, AnalyzerError>;
}

#[derive(Debug, Clone)]
pub struct WordCloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub background: Rgb<u8>,
    /// 0 ranks only, 1 sizes strictly by frequency
    pub relative_scaling: f32,
    pub min_font_size: f32,
    /// Defaults to half the canvas height
    pub max_font_size: Option<f32>,
}

impl Default for WordCloudOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            background: Rgb([255, 255, 255]),
            relative_scaling: 0.5,
            min_font_size: 4.0,
            max_font_size: None,
        }
    }
}

impl WordCloudOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.wordcloud_width,
            height: config.wordcloud_height,
            max_words: config.wordcloud_max_words,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
struct WordCount {
    total: usize,
    forms: HashMap<String, usize>,
}

impl WordCount {
    /// Most frequent casing; ties go to the lexicographically smallest form
    fn display_form(&self) -> &str {
        self.forms
            .iter()
            .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.cmp(a)))
            .map(|(form, _)| form.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[derive(Debug, Clone)]
struct PlacedWord {
    text: String,
    font_size: f32,
    /// Padded box on the canvas, already rotated for vertical words
    rect: Rect,
    vertical: bool,
}

/// Raster word cloud
/// DOCUMENTATION: Text is set in the bundled DejaVu Sans so layout and pixels
/// do not depend on the host's fonts. The same text always yields the same PNG.
pub struct RasterWordCloud {
    options: WordCloudOptions,
    token_pattern: Regex,
    stopwords: HashSet<&'static str>,
    font: Font<'static>,
}

impl RasterWordCloud {
    pub fn new(options: WordCloudOptions) -> Result<Self, AnalyzerError> {
        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| AnalyzerError::RenderError(format!("Bad token pattern: {}", e)))?;
        let font = Font::try_from_bytes(FONT_BYTES)
            .ok_or_else(|| AnalyzerError::RenderError("Bundled font is unreadable".to_string()))?;

        Ok(Self {
            options,
            token_pattern,
            stopwords: STOPWORDS.iter().copied().collect(),
            font,
        })
    }

    /// Relative word frequencies, most frequent first, scaled so the top word is 1.0
    pub fn word_frequencies(&self, text: &str) -> Vec<(String, f32)> {
        let mut counts: HashMap<String, WordCount> = HashMap::new();

        for token in self.token_pattern.find_iter(text) {
            let word = token.as_str();
            let word = word
                .strip_suffix("'s")
                .or_else(|| word.strip_suffix("'S"))
                .unwrap_or(word);

            if word.chars().all(char::is_numeric) {
                continue;
            }

            let lower = word.to_lowercase();
            if self.stopwords.contains(lower.as_str()) {
                continue;
            }

            let entry = counts.entry(lower).or_default();
            entry.total += 1;
            *entry.forms.entry(word.to_string()).or_insert(0) += 1;
        }

        fold_plurals(&mut counts);

        let mut ranked: Vec<(String, usize)> = counts
            .values()
            .map(|count| (count.display_form().to_string(), count.total))
            .collect();
        ranked.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));
        ranked.truncate(self.options.max_words);

        let top = match ranked.first() {
            Some((_, count)) => *count as f32,
            None => return Vec::new(),
        };

        ranked
            .into_iter()
            .map(|(word, count)| (word, count as f32 / top))
            .collect()
    }

    fn layout(&self, frequencies: &[(String, f32)]) -> Vec<PlacedWord> {
        let opts = &self.options;
        let rs = opts.relative_scaling;
        let mut font_size = opts
            .max_font_size
            .unwrap_or(opts.height as f32 * 0.5);
        let mut last_freq = 1.0;
        let mut boxes: Vec<Rect> = Vec::new();
        let mut placed = Vec::new();

        for (index, (word, freq)) in frequencies.iter().enumerate() {
            if index > 0 {
                font_size = ((rs * (freq / last_freq) + (1.0 - rs)) * font_size).round();
            }
            let vertical = index % 10 == 9;

            let position = loop {
                if font_size < opts.min_font_size {
                    break None;
                }
                let (w, h) = self.text_extent(word, font_size, vertical);
                if let Some(rect) = self.find_position(w, h, &boxes) {
                    break Some(rect);
                }
                font_size -= (font_size * 0.1).max(1.0);
            };

            // sizes only shrink from here, so nothing later fits either
            let Some(rect) = position else { break };

            boxes.push(rect);
            placed.push(PlacedWord {
                text: word.clone(),
                font_size,
                rect,
                vertical,
            });
            last_freq = *freq;
        }

        placed
    }

    fn find_position(&self, w: f32, h: f32, boxes: &[Rect]) -> Option<Rect> {
        let (cw, ch) = (self.options.width as f32, self.options.height as f32);
        if w > cw || h > ch {
            return None;
        }

        // the spiral is stretched horizontally by the aspect ratio, so
        // 0.75 * height reaches every corner of the canvas
        let aspect = cw / ch;
        let max_radius = ch * 0.75;
        let mut theta: f32 = 0.0;

        loop {
            let radius = SPIRAL_SPACING * theta;
            if radius > max_radius {
                return None;
            }

            let cx = cw / 2.0 + aspect * radius * theta.cos();
            let cy = ch / 2.0 + radius * theta.sin();
            let rect = Rect {
                x: cx - w / 2.0,
                y: cy - h / 2.0,
                w,
                h,
            };

            let inside = rect.x >= 0.0 && rect.y >= 0.0 && rect.x + w <= cw && rect.y + h <= ch;
            if inside && !boxes.iter().any(|b| b.intersects(&rect)) {
                return Some(rect);
            }

            theta += (SPIRAL_STEP_PX / (radius * aspect.max(1.0)).max(1.0)).min(0.5);
        }
    }

    /// Padded box of `word` set at `font_size`
    fn text_extent(&self, word: &str, font_size: f32, vertical: bool) -> (f32, f32) {
        let scale = Scale::uniform(font_size);
        let v_metrics = self.font.v_metrics(scale);
        let advance = self
            .font
            .layout(word, scale, point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);

        let w = advance.ceil() + WORD_PADDING * 2.0;
        let h = (v_metrics.ascent - v_metrics.descent).ceil() + WORD_PADDING * 2.0;
        if vertical {
            (h, w)
        } else {
            (w, h)
        }
    }

    fn rasterize(&self, words: &[PlacedWord]) -> RgbImage {
        let opts = &self.options;
        let mut canvas = RgbImage::from_pixel(opts.width, opts.height, opts.background);

        for word in words {
            let scale = Scale::uniform(word.font_size);
            let color = color_for(&word.text);
            let (x, y) = (word.rect.x.round() as i32, word.rect.y.round() as i32);
            let pad = WORD_PADDING as i32;

            if word.vertical {
                // set horizontally on a scratch tile, then turn it to read bottom-up
                let mut tile = RgbImage::from_pixel(
                    word.rect.h.ceil() as u32,
                    word.rect.w.ceil() as u32,
                    opts.background,
                );
                draw_text_mut(&mut tile, color, pad, pad, scale, &self.font, &word.text);
                let tile = imageops::rotate270(&tile);
                imageops::replace(&mut canvas, &tile, x as i64, y as i64);
            } else {
                draw_text_mut(&mut canvas, color, x + pad, y + pad, scale, &self.font, &word.text);
            }
        }

        canvas
    }
}

impl WordCloudRenderer for RasterWordCloud {
    fn render(&self, text: &str) -> Result<WordCloudArtifact, AnalyzerError> {
        let frequencies = self.word_frequencies(text);
        if frequencies.is_empty() {
            return Err(AnalyzerError::RenderError(
                "We need at least 1 word to plot a word cloud, got 0.".to_string(),
            ));
        }

        let words = self.layout(&frequencies);
        log::debug!(
            "Word cloud placed {} of {} words",
            words.len(),
            frequencies.len()
        );

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(self.rasterize(&words))
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
            .map_err(|e| AnalyzerError::RenderError(format!("PNG encoding failed: {}", e)))?;

        Ok(WordCloudArtifact {
            width: self.options.width,
            height: self.options.height,
            png,
        })
    }
}

/// Merge "rooms" into "room" when both occur
fn fold_plurals(counts: &mut HashMap<String, WordCount>) {
    let plurals: Vec<String> = counts
        .keys()
        .filter(|word| word.ends_with('s') && !word.ends_with("ss") && word.chars().count() > 3)
        .filter(|word| counts.contains_key(&word[..word.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        if let Some(count) = counts.remove(&plural) {
            if let Some(singular) = counts.get_mut(&plural[..plural.len() - 1]) {
                singular.total += count.total;
            }
        }
    }
}

fn color_for(word: &str) -> Rgb<u8> {
    let hash = word
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    Rgb(PALETTE[hash % PALETTE.len()])
}
