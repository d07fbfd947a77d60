use serde::{Deserialize, Serialize};

use crate::domain::a003_translation::aggregate::Translation;
use crate::domain::common::EntityId;
use crate::shared::text::count_words;

/// Тип абзаца исходного текста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ParagraphType {
    Title,
    Heading,
    #[default]
    Body,
    Quote,
    Footnote,
}

impl ParagraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphType::Title => "Title",
            ParagraphType::Heading => "Heading",
            ParagraphType::Body => "Body",
            ParagraphType::Quote => "Quote",
            ParagraphType::Footnote => "Footnote",
        }
    }

    pub fn all() -> [ParagraphType; 5] {
        [
            ParagraphType::Title,
            ParagraphType::Heading,
            ParagraphType::Body,
            ParagraphType::Quote,
            ParagraphType::Footnote,
        ]
    }
}

/// One segment of a project's source text.
///
/// `position` is 1-based and unique within a project; gaps are allowed.
/// `translations` is ordered most-recent-last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub id: EntityId,
    pub project_id: EntityId,
    pub original_text: String,
    #[serde(rename = "type", default)]
    pub paragraph_type: ParagraphType,
    pub position: u32,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Paragraph {
    /// Word count derived from the source text; the server value may be stale
    pub fn computed_word_count(&self) -> usize {
        count_words(&self.original_text)
    }

    pub fn latest_translation(&self) -> Option<&Translation> {
        self.translations.last()
    }
}

/// Тело запроса POST /Paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraph {
    pub project_id: EntityId,
    pub original_text: String,
    #[serde(rename = "type")]
    pub paragraph_type: ParagraphType,
    pub position: u32,
    pub word_count: usize,
}

impl CreateParagraph {
    pub fn new(
        project_id: EntityId,
        original_text: String,
        paragraph_type: ParagraphType,
        position: u32,
    ) -> Self {
        let word_count = count_words(&original_text);
        Self {
            project_id,
            original_text,
            paragraph_type,
            position,
            word_count,
        }
    }

    /// Builds create requests for `blocks`, numbered after `last_position`
    pub fn batch_after(
        project_id: EntityId,
        last_position: u32,
        blocks: Vec<String>,
        paragraph_type: ParagraphType,
    ) -> Vec<CreateParagraph> {
        blocks
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                CreateParagraph::new(project_id, text, paragraph_type, last_position + i as u32 + 1)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_renamed() {
        let json = r#"{"id":1,"projectId":3,"originalText":"Alpha test","type":"Heading","position":2}"#;
        let p: Paragraph = serde_json::from_str(json).unwrap();
        assert_eq!(p.paragraph_type, ParagraphType::Heading);
        assert_eq!(p.word_count, 0);
        assert_eq!(p.computed_word_count(), 2);
        assert!(p.latest_translation().is_none());
    }

    #[test]
    fn test_batch_after_continues_numbering() {
        let batch = CreateParagraph::batch_after(
            5,
            3,
            vec!["one two".to_string(), "three".to_string()],
            ParagraphType::Body,
        );
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].position, 4);
        assert_eq!(batch[1].position, 5);
        assert_eq!(batch[0].word_count, 2);
        assert_eq!(batch[1].project_id, 5);
    }
}
