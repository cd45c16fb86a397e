use serde::{Deserialize, Serialize};

/// 經文位置，例如 "John 3:16"，原樣送出不做解析
pub type Reference = String;

/// ESV API `/v3/passage/text/` 的回應
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageResult {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub canonical: String,
    #[serde(default)]
    pub parsed: Vec<Vec<i64>>,
    #[serde(default)]
    pub passages: Vec<String>,
    #[serde(default)]
    pub passage_meta: Vec<PassageMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageMeta {
    #[serde(default)]
    pub canonical: String,
    #[serde(default)]
    pub chapter_start: Vec<i64>,
    #[serde(default)]
    pub chapter_end: Vec<i64>,
    pub prev_verse: Option<i64>,
    pub next_verse: Option<i64>,
}

impl PassageResult {
    /// 第一段經文（去除前後空白）；空白則視為沒有經文
    pub fn first_passage(&self) -> Option<&str> {
        self.passages
            .first()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }
}
