pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod model;
pub mod pos;

pub use self::core::clarify::{clarify_nasal, clarify_obstruent};
pub use self::core::composer::{render_document, render_line, RenderOptions};
pub use self::core::jongseong::attach_jongseong;
pub use self::core::unicode::{compose_syllable, decompose_syllable};
pub use self::core::word::process_word_internal;
pub use error::Error;
pub use export::{export_lines, export_text};
pub use model::{Document, Line, PronunciationVariant, Word};
