use serde::{Deserialize, Serialize};

/// The flattened pair kept from one survey submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub name: String,
    pub message: String,
}

impl Response {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Survey question keys whose answers become a [`Response`].
///
/// The defaults match the question numbering of the birthday survey this
/// tool was written against. If that survey is edited and its questions are
/// renumbered, extraction fails with [`crate::Error::MissingAnswer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionIds {
    pub message: String,
    pub name: String,
}

pub const MESSAGE_QUESTION_ID: &str = "2";
pub const NAME_QUESTION_ID: &str = "3";

impl Default for QuestionIds {
    fn default() -> Self {
        Self {
            message: MESSAGE_QUESTION_ID.to_string(),
            name: NAME_QUESTION_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_field_order() {
        let r = Response::new("Ann", "Happy birthday!");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"Ann","message":"Happy birthday!"}"#);
    }

    #[test]
    fn test_deserialize_ignores_key_order() {
        let r: Response =
            serde_json::from_str(r#"{"message":"Hi","name":"Bo"}"#).unwrap();
        assert_eq!(r, Response::new("Bo", "Hi"));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let r = serde_json::from_str::<Response>(r#"{"name":"Bo"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_default_question_ids() {
        let ids = QuestionIds::default();
        assert_eq!(ids.message, "2");
        assert_eq!(ids.name, "3");
    }
}
