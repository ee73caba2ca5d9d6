//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Domain types go out as-is (snake_case); request bodies name multi-word
//! fields in camelCase, the way the browser client sends them.

use serde::{Deserialize, Serialize};

use crate::domain::{Badge, CodeGenerationResult, Language, LearningPath};
use crate::paths::PathProgress;
use crate::progress::{CategoryProgress, ProgressStats};
use crate::transpile::TargetLanguage;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Translate {
        logic: String,
        #[serde(default)]
        scenario: String,
    },
    RecordProgress {
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(flatten)]
        body: RecordProgressIn,
    },
    GetStats {
        #[serde(rename = "userId")]
        user_id: String,
    },
    GetCategoryProgress {
        #[serde(rename = "userId")]
        user_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Translation {
        result: CodeGenerationResult,
    },
    ProgressRecorded {
        awarded: Vec<Badge>,
    },
    Stats {
        stats: ProgressStats,
    },
    CategoryProgress {
        categories: Vec<CategoryProgress>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct ScenarioQuery {
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct TranslateIn {
    pub logic: String,
    #[serde(default)]
    pub scenario: String,
}

#[derive(Deserialize)]
pub struct AssistIn {
    pub logic: String,
    #[serde(default)]
    pub language: TargetLanguage,
}

#[derive(Deserialize)]
pub struct RefineIn {
    pub code: String,
    pub feedback: String,
}

#[derive(Deserialize)]
pub struct ExplainIn {
    pub code: String,
}
#[derive(Serialize)]
pub struct ExplainOut {
    pub explanation: String,
}

#[derive(Deserialize)]
pub struct ConvertIn {
    pub code: String,
    pub target: TargetLanguage,
}
#[derive(Serialize)]
pub struct ConvertOut {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordProgressIn {
    #[serde(rename = "scenarioId")]
    pub scenario_id: String,
    #[serde(rename = "userLogic", default)]
    pub user_logic: String,
    #[serde(rename = "generatedCode", default)]
    pub generated_code: Option<CodeGenerationResult>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub completed: bool,
}
#[derive(Serialize)]
pub struct RecordProgressOut {
    pub awarded: Vec<Badge>,
}

#[derive(Serialize)]
pub struct CategoriesOut {
    pub categories: Vec<String>,
}

#[derive(Serialize)]
pub struct LearningPathOut {
    #[serde(flatten)]
    pub path: LearningPath,
    pub progress: PathProgress,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_progress_ws_message_parses() {
        let msg: ClientWsMessage = serde_json::from_str(
            r#"{"type":"record_progress","userId":"u1","scenarioId":"1","userLogic":"if sunny","language":"javascript","completed":true}"#,
        )
        .unwrap();
        match msg {
            ClientWsMessage::RecordProgress { user_id, body } => {
                assert_eq!(user_id, "u1");
                assert_eq!(body.scenario_id, "1");
                assert_eq!(body.language, Language::Javascript);
                assert!(body.completed);
                assert!(body.generated_code.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn server_messages_are_tagged() {
        let v = serde_json::to_value(ServerWsMessage::Error { message: "boom".into() }).unwrap();
        assert_eq!(v["type"], "error");
        let v = serde_json::to_value(ServerWsMessage::Pong).unwrap();
        assert_eq!(v["type"], "pong");
    }
}
