use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// A dictionary entry as returned by the server.
///
/// `id` is assigned by the server and immutable. Optional wire fields
/// (`examples`, `tags`, `similar_terms`) deserialize as empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlangTerm {
    pub id: i64,

    pub term: String,

    pub meaning: String,

    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Semantic-search neighbours; populated only by the server.
    #[serde(default)]
    pub similar_terms: Vec<SimilarTerm>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    /// Server-computed vote total.
    #[serde(default)]
    pub vote_count: i64,
}

/// A `{id, term, similarity}` triple attached to search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarTerm {
    pub id: i64,
    pub term: String,
    pub similarity: f32,
}

/// A submission payload: a [`SlangTerm`] minus `id` and every
/// server-populated field.
///
/// Unset optional fields are omitted from the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSlangTerm {
    pub term: String,

    pub meaning: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl NewSlangTerm {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Reject payloads whose `term` or `meaning` is empty after trimming.
    ///
    /// Runs before any network call; a failed submission never leaves the
    /// process.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.term.trim().is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        if self.meaning.trim().is_empty() {
            return Err(ValidationError::EmptyMeaning);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_fields_deserialize_empty() {
        let term: SlangTerm =
            serde_json::from_str(r#"{"id": 42, "term": "lit", "meaning": "cool"}"#).unwrap();

        assert_eq!(term.id, 42);
        assert_eq!(term.term, "lit");
        assert_eq!(term.meaning, "cool");
        assert!(term.examples.is_empty());
        assert!(term.tags.is_empty());
        assert!(term.similar_terms.is_empty());
        assert_eq!(term.origin, None);
        assert_eq!(term.vote_count, 0);
    }

    #[test]
    fn similar_terms_deserialize() {
        let term: SlangTerm = serde_json::from_str(
            r#"{
                "id": 1,
                "term": "rizz",
                "meaning": "charisma",
                "similar_terms": [{"id": 2, "term": "game", "similarity": 0.87}]
            }"#,
        )
        .unwrap();

        assert_eq!(term.similar_terms.len(), 1);
        assert_eq!(term.similar_terms[0].term, "game");
        assert!((term.similar_terms[0].similarity - 0.87).abs() < 1e-6);
    }

    #[test]
    fn submission_payload_has_no_id() {
        let new = NewSlangTerm::new("bet", "agreement")
            .example("Bet, see you at 8.")
            .tag("gen-z");

        let json = serde_json::to_value(&new).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("vote_count"));
        assert!(!obj.contains_key("similar_terms"));
        assert_eq!(obj["term"], "bet");
        assert_eq!(obj["examples"][0], "Bet, see you at 8.");
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let new = NewSlangTerm::new("bet", "agreement");
        let json = serde_json::to_string(&new).unwrap();
        assert!(!json.contains("origin"));
        assert!(!json.contains("part_of_speech"));
        assert!(!json.contains("examples"));
        assert!(!json.contains("tags"));
    }
}
