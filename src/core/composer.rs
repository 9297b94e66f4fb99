//! 줄 단위 한글 발음 조합기
//!
//! 단어마다 선택된 발음을 골라 단어 내부 세분화를 적용하고,
//! 품사에 따라 띄어쓰기를 정한 뒤 단어 경계에서 다시 세분화한다.
//! 마지막으로 단독 받침 자모를 앞 음절에 붙인다.

use std::borrow::Cow;

use crate::core::clarify::{clarify, clarify_nasal, SENTENCE_END};
use crate::core::jongseong::attach_jongseong;
use crate::core::word::process_word_internal;
use crate::model::{Document, Line, PronunciationVariant};
use crate::pos::{is_proper_noun, suppresses_space};

/// 렌더링 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 장음을 하이픈으로 표기 (`hangul_pron`), 아니면 모음 반복 (`hangul_kana`)
    pub use_hyphen_form: bool,
    /// 품사 기반 띄어쓰기
    pub insert_spacing: bool,
    /// 응(ん) 받침 세분화
    pub clarify_nasal: bool,
    /// 촉음(っ) 받침 세분화
    pub clarify_obstruent: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_hyphen_form: true,
            insert_spacing: true,
            clarify_nasal: true,
            clarify_obstruent: true,
        }
    }
}

/// 한 줄의 단어들을 하나의 한글 문자열로 조합
pub fn render_line(line: &Line, options: &RenderOptions) -> String {
    if line.is_blank() {
        return String::new();
    }

    let mut result: Vec<char> = Vec::new();
    let mut previous: Option<Cow<'_, PronunciationVariant>> = None;

    for word in &line.words {
        let selected = word.active_variant();
        let proper_noun = is_proper_noun(&selected);

        let mut text = selected.hangul(options.use_hyphen_form).to_string();
        if !proper_noun {
            text = process_word_internal(
                &text,
                options.clarify_nasal,
                options.clarify_obstruent,
                proper_noun,
            );
        }

        let add_space = match &previous {
            Some(prev) if options.insert_spacing => !suppresses_space(prev, &selected),
            _ => false,
        };

        if let Some(first) = text.chars().next() {
            if add_space && !result.is_empty() {
                // 띄어 쓰는 경계는 문장 끝처럼 응 발음을 정한다
                if options.clarify_nasal {
                    if let Some(last) = result.last_mut() {
                        *last = clarify_nasal(*last, Some(SENTENCE_END));
                    }
                }
                result.push(' ');
            } else if previous.is_some() {
                if let Some(last) = result.last_mut() {
                    *last = clarify(
                        *last,
                        Some(first),
                        options.clarify_nasal,
                        options.clarify_obstruent,
                    );
                }
            }
        }

        result.extend(text.chars());
        previous = Some(selected);
    }

    if result.first() == Some(&' ') {
        result.remove(0);
    }

    let composed: String = result.into_iter().collect();
    attach_jongseong(&composed, options)
}

/// 문서 전체를 줄 단위로 렌더링 (빈 줄은 빈 문자열)
pub fn render_document(doc: &Document, options: &RenderOptions) -> Vec<String> {
    doc.lines
        .iter()
        .map(|line| render_line(line, options))
        .collect()
}
