use crate::core::references::ReferenceStore;
use crate::core::render::{render, BorderStyle};
use crate::domain::model::Reference;
use crate::domain::ports::PassageSource;
use crate::utils::error::Result;

/// 本次要查詢的經文
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Explicit(Reference),
    Random(Reference),
}

impl Selection {
    pub fn reference(&self) -> &str {
        match self {
            Selection::Explicit(r) | Selection::Random(r) => r,
        }
    }
}

pub struct VerseEngine<'a, S: PassageSource> {
    source: S,
    references: &'a ReferenceStore,
}

impl<'a, S: PassageSource> VerseEngine<'a, S> {
    pub fn new(source: S, references: &'a ReferenceStore) -> Self {
        Self { source, references }
    }

    /// 有指定經文就用指定的，否則從內建清單隨機挑一段
    pub fn select(&self, explicit: Option<Reference>) -> Selection {
        match explicit {
            Some(reference) => Selection::Explicit(reference),
            None => {
                let reference = self.references.pick_random().to_string();
                tracing::debug!("Picked random reference: {}", reference);
                Selection::Random(reference)
            }
        }
    }

    pub async fn run(
        &self,
        selection: &Selection,
        terminal_width: usize,
        style: BorderStyle,
    ) -> Result<Vec<String>> {
        let result = self.source.fetch(selection.reference()).await?;
        Ok(render(Some(&result), terminal_width, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::NO_PASSAGE;
    use crate::domain::model::PassageResult;
    use crate::utils::error::VerseError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubSource {
        response: fn(&str) -> Result<PassageResult>,
        requested: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn new(response: fn(&str) -> Result<PassageResult>) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PassageSource for StubSource {
        async fn fetch(&self, reference: &str) -> Result<PassageResult> {
            self.requested.lock().unwrap().push(reference.to_string());
            (self.response)(reference)
        }
    }

    fn echo(reference: &str) -> Result<PassageResult> {
        Ok(PassageResult {
            query: reference.to_string(),
            canonical: reference.to_string(),
            passages: vec![format!("Text of {}", reference)],
            ..Default::default()
        })
    }

    fn store() -> ReferenceStore {
        ReferenceStore::from_json(r#"{"verses": ["Psalm 46:10", "Micah 6:8"]}"#).unwrap()
    }

    #[test]
    fn test_select_explicit() {
        let references = store();
        let engine = VerseEngine::new(StubSource::new(echo), &references);
        let selection = engine.select(Some("Romans 12:1-2".to_string()));
        assert_eq!(selection, Selection::Explicit("Romans 12:1-2".to_string()));
    }

    #[test]
    fn test_select_random_uses_store() {
        let references = store();
        let engine = VerseEngine::new(StubSource::new(echo), &references);
        match engine.select(None) {
            Selection::Random(r) => assert!(references.all().contains(&r)),
            other => panic!("expected random selection, got {:?}", other),
        }
    }

    #[test]
    fn test_run_renders_fetched_passage() {
        let references = store();
        let engine = VerseEngine::new(StubSource::new(echo), &references);
        let selection = Selection::Explicit("Micah 6:8".to_string());

        let lines =
            tokio_test::block_on(engine.run(&selection, 84, BorderStyle::Unicode)).unwrap();

        assert_eq!(lines[2].trim(), "Micah 6:8");
        assert_eq!(lines[4], " Text of Micah 6:8");
        assert_eq!(*engine.source.requested.lock().unwrap(), vec!["Micah 6:8"]);
    }

    #[test]
    fn test_run_empty_result_is_no_passage() {
        let references = store();
        let engine = VerseEngine::new(
            StubSource::new(|_| Ok(PassageResult::default())),
            &references,
        );
        let selection = engine.select(None);

        let lines =
            tokio_test::block_on(engine.run(&selection, 84, BorderStyle::Unicode)).unwrap();
        assert_eq!(lines, vec![NO_PASSAGE]);
    }

    #[test]
    fn test_run_propagates_errors() {
        let references = store();
        let engine = VerseEngine::new(
            StubSource::new(|_| {
                Err(VerseError::ApiError {
                    status: 502,
                    body: "Bad Gateway".to_string(),
                })
            }),
            &references,
        );
        let selection = Selection::Random("Psalm 46:10".to_string());

        let err =
            tokio_test::block_on(engine.run(&selection, 84, BorderStyle::Unicode)).unwrap_err();
        assert!(matches!(err, VerseError::ApiError { status: 502, .. }));
        assert_eq!(engine.source.requested.lock().unwrap().len(), 1);
    }
}
