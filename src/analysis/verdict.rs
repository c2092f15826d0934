/// Analysis response wire type and its mapping to a displayed verdict

use iced::Color;
use serde::{Deserialize, Serialize};

/// The `result` value the endpoint uses for blurred images
pub const BLUR_RESULT: &str = "Blur";

/// Message shown for any failure the endpoint did not describe itself
pub const GENERIC_FAILURE: &str = "An error occurred during analysis.";

/// Red accent for errors and blur warnings (#ff4b1f)
pub const WARNING_ACCENT: Color = Color {
    r: 0xff as f32 / 255.0,
    g: 0x4b as f32 / 255.0,
    b: 0x1f as f32 / 255.0,
    a: 1.0,
};

/// Blue accent for descriptions (#2575fc)
pub const INFO_ACCENT: Color = Color {
    r: 0x25 as f32 / 255.0,
    g: 0x75 as f32 / 255.0,
    b: 0xfc as f32 / 255.0,
    a: 1.0,
};

/// JSON body returned by `POST /api/analyze`
///
/// Either `{"result": ..., "details"?: ...}` or `{"error": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What the result region displays
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The endpoint reported an error, or the request itself failed
    Error(String),
    /// The image is blurred; carries the endpoint's details, if any
    Blur(Option<String>),
    /// A description of a sharp image
    Description(String),
}

impl Verdict {
    /// Classify a parsed response. A non-empty `error` wins over `result`;
    /// a body with neither yields `None`.
    pub fn from_response(response: AnalysisResponse) -> Option<Self> {
        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            return Some(Verdict::Error(error));
        }

        match response.result {
            Some(result) if result == BLUR_RESULT => Some(Verdict::Blur(response.details)),
            Some(result) => Some(Verdict::Description(result)),
            None => None,
        }
    }

    /// The catch-all verdict for failed requests
    pub fn failure() -> Self {
        Verdict::Error(GENERIC_FAILURE.to_string())
    }

    /// Full text for the result region
    pub fn message(&self) -> String {
        match self {
            Verdict::Error(error) => format!("Error: {}", error),
            Verdict::Blur(details) => {
                format!("⚠️ BLUR DETECTED\n\n{}", details.as_deref().unwrap_or(""))
            }
            Verdict::Description(text) => format!("✨ AI DESCRIPTION\n\n{}", text),
        }
    }

    /// Border accent for the result region
    pub fn accent(&self) -> Color {
        match self {
            Verdict::Error(_) | Verdict::Blur(_) => WARNING_ACCENT,
            Verdict::Description(_) => INFO_ACCENT,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Verdict::Error(_))
    }
}
