use serde_json::{Map, Value};

// the backend is inconsistent about key casing: every field may arrive under its
// lower-initial or upper-initial name, and the lower-initial one wins when both are present
pub const INTERVIEW_SUMMARY_FIELDS: &[&str] = &[
    "interviewId",
    "applicationId",
    "jobTitle",
    "scheduledTime",
    "teamsLink",
];

pub const APPLICATION_DETAIL_FIELDS: &[&str] = &[
    "interviewId",
    "applicationId",
    "applicantName",
    "email",
    "resumePath",
    "keywordScore",
    "currentRound",
    "teamsLink",
    "scheduledTime",
];

fn upper_initial(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn pick<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(&upper_initial(field)).filter(|v| !v.is_null()))
}

// fields present under neither casing (or only as null) stay absent, so rendering
// treats them as unknown rather than zero or empty
pub fn canonicalize(raw: &Value, fields: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(obj) = raw {
        for field in fields {
            if let Some(value) = pick(obj, field) {
                out.insert((*field).into(), value.clone());
            }
        }
    } else {
        tracing::warn!("expected an object payload, got {}", raw);
    }
    Value::Object(out)
}

pub fn canonicalize_list(raw: &Value, fields: &[&str]) -> Value {
    match raw {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| canonicalize(item, fields)).collect())
        }
        other => {
            tracing::warn!("expected an array payload, got {}", other);
            Value::Array(vec![])
        }
    }
}
