//! Flatten a raw survey payload into [`Response`] records.
//!
//! The payload is decoded as a generic [`Value`] tree. Each entry of the
//! top-level `data` array carries a `survey_data` object keyed by question
//! id, and every question holds its text under `answer`:
//!
//! ```json
//! {"data":[{"survey_data":{"2":{"answer":"Happy birthday!"},"3":{"answer":"Ann"}}}]}
//! ```

use crate::error::{Error, Result};
use crate::types::{QuestionIds, Response};
use serde_json::Value;

/// Outcome of looking up one answer inside a `survey_data` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    /// The question id or its `answer` key is absent.
    Missing,
    /// A value along the path is not the expected kind.
    WrongShape(&'static str),
}

/// Two-level lookup: `survey_data[question]["answer"]`.
pub fn lookup_answer(survey_data: &Value, question: &str) -> Lookup {
    let Some(questions) = survey_data.as_object() else {
        return Lookup::WrongShape("survey_data is not an object");
    };
    let Some(entry) = questions.get(question) else {
        return Lookup::Missing;
    };
    let Some(fields) = entry.as_object() else {
        return Lookup::WrongShape("question entry is not an object");
    };
    match fields.get("answer") {
        None => Lookup::Missing,
        Some(Value::String(s)) => Lookup::Found(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Lookup::Found(v.to_string()),
        Some(_) => Lookup::WrongShape("answer is not a scalar"),
    }
}

/// Extract one record per `data` entry, preserving payload order.
///
/// Any structural mismatch fails the whole extraction; no partial list is
/// returned.
pub fn extract_responses(payload: &Value, ids: &QuestionIds) -> Result<Vec<Response>> {
    let entries = payload
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::UnexpectedShape("payload has no `data` array".to_string()))?;

    let mut responses = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let survey_data = entry.get("survey_data").ok_or_else(|| {
            Error::UnexpectedShape(format!("response {} has no `survey_data`", index))
        })?;
        let message = answer_at(survey_data, &ids.message, index)?;
        let name = answer_at(survey_data, &ids.name, index)?;
        responses.push(Response { name, message });
    }
    Ok(responses)
}

fn answer_at(survey_data: &Value, question: &str, index: usize) -> Result<String> {
    match lookup_answer(survey_data, question) {
        Lookup::Found(text) => Ok(text),
        Lookup::Missing => Err(Error::MissingAnswer {
            index,
            question: question.to_string(),
        }),
        Lookup::WrongShape(what) => Err(Error::UnexpectedShape(format!(
            "response {}, question {}: {}",
            index, question, what
        ))),
    }
}
