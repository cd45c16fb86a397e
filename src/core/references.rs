use crate::domain::model::Reference;
use crate::utils::error::{Result, VerseError};
use rand::Rng;
use serde::Deserialize;

const BUNDLED_VERSES: &str = include_str!("../../data/verses.json");

#[derive(Debug, Deserialize)]
struct VersesData {
    verses: Vec<Reference>,
}

/// 內建經文清單；啟動時載入一次之後唯讀，建構成功即保證非空
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    references: Vec<Reference>,
}

impl ReferenceStore {
    /// 解析編譯時嵌入的 `data/verses.json`
    pub fn load_all() -> Result<Self> {
        Self::from_json(BUNDLED_VERSES)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let data: VersesData =
            serde_json::from_str(content).map_err(|e| VerseError::ReferenceDataError {
                message: e.to_string(),
            })?;

        if data.verses.is_empty() {
            return Err(VerseError::ReferenceDataError {
                message: "verse list is empty".to_string(),
            });
        }

        tracing::debug!("Loaded {} bundled references", data.verses.len());
        Ok(Self {
            references: data.verses,
        })
    }

    pub fn pick_random(&self) -> &str {
        let i = rand::rng().random_range(0..self.references.len());
        &self.references[i]
    }

    pub fn all(&self) -> &[Reference] {
        &self.references
    }
}
