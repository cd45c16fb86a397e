use crate::domain::model::PassageResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 經文來源；正式實作為 `EsvClient`
#[async_trait]
pub trait PassageSource: Send + Sync {
    async fn fetch(&self, reference: &str) -> Result<PassageResult>;
}
