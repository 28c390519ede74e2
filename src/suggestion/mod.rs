//! AI suggestion workflow: request construction, reply parsing, and
//! the merge pipeline that reconciles suggestions with current state

pub mod merge;
pub mod payload;
pub mod request;

pub use merge::merge_settings;
pub use payload::{
    BorderSuggestion, GradientSuggestion, LogoSuggestion, OverlaySuggestion, ShadowSuggestion,
    StopSuggestion, SuggestionError, TextSuggestion,
};
pub use request::{
    skill_document, InlineImage, RequestError, SuggestionRequest, SuggestionTarget,
    MAX_IMAGE_BYTES,
};
