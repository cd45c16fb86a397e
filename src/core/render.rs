use crate::domain::model::PassageResult;
use unicode_width::UnicodeWidthStr;

pub const NO_PASSAGE: &str = "No passage found";
pub const MIN_DISPLAY_WIDTH: usize = 40;
pub const MAX_DISPLAY_WIDTH: usize = 120;
const MARGIN: usize = 4;

/// 邊框字元樣式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Unicode,
    Ascii,
}

impl BorderStyle {
    fn heavy(self) -> char {
        match self {
            BorderStyle::Unicode => '═',
            BorderStyle::Ascii => '=',
        }
    }

    fn light(self) -> char {
        match self {
            BorderStyle::Unicode => '─',
            BorderStyle::Ascii => '-',
        }
    }
}

/// 終端寬度扣掉邊距後夾在 40..=120
pub fn display_width(terminal_width: usize) -> usize {
    terminal_width
        .saturating_sub(MARGIN)
        .clamp(MIN_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH)
}

pub fn center_padding(width: usize, text: &str) -> usize {
    width.saturating_sub(text.width()) / 2
}

/// 貪婪斷行；單字超過 `max_width` 時獨佔一行，不切字
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.width() + word.width() + 1 > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn render(
    result: Option<&PassageResult>,
    terminal_width: usize,
    style: BorderStyle,
) -> Vec<String> {
    let Some((reference, passage)) =
        result.and_then(|r| r.first_passage().map(|p| (r.canonical.as_str(), p)))
    else {
        return vec![NO_PASSAGE.to_string()];
    };

    let width = display_width(terminal_width);
    let heavy_rule: String = std::iter::repeat(style.heavy()).take(width).collect();
    let light_rule: String = std::iter::repeat(style.light()).take(width).collect();

    let mut lines = vec![String::new(), heavy_rule.clone()];
    lines.push(format!(
        "{}{}",
        " ".repeat(center_padding(width, reference)),
        reference
    ));
    lines.push(light_rule);

    for paragraph in passage.split('\n') {
        for wrapped in wrap_text(paragraph, width - 2) {
            lines.push(format!(" {}", wrapped));
        }
    }

    lines.push(heavy_rule);
    lines.push(String::new());
    lines
}
