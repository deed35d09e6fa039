use serde::{Serialize, Deserialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Men,
    Women,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self { Gender::Men => "men", Gender::Women => "women" }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            other => Err(format!("unknown gender '{other}' (expected men or women)")),
        }
    }
}

/// Body sent to the recommendation backend. `request_id` travels as a header, not in the JSON.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    #[serde(skip)]
    pub request_id: Uuid,
    pub clothing_item: String,
    pub color: String,
    pub styles: Vec<String>,
    pub gender: Gender,
}

/// Whatever the backend returns. Interpreting it is up to the renderer.
pub type Recommendations = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn gender_parses_loosely() {
        assert_eq!(" Women ".parse::<Gender>(), Ok(Gender::Women));
        assert_eq!("MEN".parse::<Gender>(), Ok(Gender::Men));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn request_body_has_four_fields() {
        let req = RecommendationRequest {
            request_id: Uuid::new_v4(),
            clothing_item: "shirt".into(),
            color: "red".into(),
            styles: vec!["casual".into()],
            gender: Gender::Men,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"clothing_item": "shirt", "color": "red", "styles": ["casual"], "gender": "men"})
        );
    }
}
