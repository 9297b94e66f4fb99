//! 변환 데이터 모델 (JSON)
//!
//! 형태소 분석기가 만든 문서를 그대로 읽는다. 엔진은 이 데이터를 읽기만 하고,
//! `selected_id` 변경은 선택 UI 쪽에서 [`Document::set_selection`]으로 한다.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::Error;

/// 한 단어의 발음 후보
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PronunciationVariant {
    /// 한글 발음 (장음은 하이픈 표기)
    pub hangul_pron: String,
    /// 한글 발음 (장음은 모음 반복 표기)
    pub hangul_kana: String,
    /// 히라가나 발음 (표시용)
    #[serde(default)]
    pub hiragana_pron: String,
    #[serde(default)]
    pub hiragana_kana: String,
    #[serde(default)]
    pub katakana_pron: String,
    #[serde(default)]
    pub katakana_kana: String,
    /// 품사 대분류
    #[serde(default)]
    pub pos1: String,
    /// 품사 중분류
    #[serde(default)]
    pub pos2: String,
    /// 품사 소분류
    #[serde(default)]
    pub pos3: String,
}

impl PronunciationVariant {
    /// 원문을 그대로 발음으로 쓰는 대체 후보 (품사 없음)
    pub fn from_surface(surface: &str) -> Self {
        Self {
            hangul_pron: surface.to_string(),
            hangul_kana: surface.to_string(),
            hiragana_pron: surface.to_string(),
            hiragana_kana: surface.to_string(),
            katakana_pron: surface.to_string(),
            katakana_kana: surface.to_string(),
            pos1: String::new(),
            pos2: String::new(),
            pos3: String::new(),
        }
    }

    /// 표기 방식에 맞는 한글 텍스트
    pub fn hangul(&self, use_hyphen_form: bool) -> &str {
        if use_hyphen_form {
            &self.hangul_pron
        } else {
            &self.hangul_kana
        }
    }
}

/// 형태소 하나
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Word {
    /// 원문
    pub surface: String,
    /// 선택된 발음 후보 인덱스
    #[serde(default)]
    pub selected_id: usize,
    /// 발음 후보 (순위순)
    #[serde(default)]
    pub alternative_pronunciations: Vec<PronunciationVariant>,
}

impl Word {
    /// 현재 선택된 발음 후보
    ///
    /// 후보가 비어 있거나 인덱스가 범위를 벗어나면 원문으로 만든 대체 후보를 돌려준다.
    pub fn active_variant(&self) -> Cow<'_, PronunciationVariant> {
        match self.alternative_pronunciations.get(self.selected_id) {
            Some(variant) => Cow::Borrowed(variant),
            None => {
                log::debug!(
                    "선택 인덱스 {} 사용 불가 (후보 {}개), 원문 사용: {}",
                    self.selected_id,
                    self.alternative_pronunciations.len(),
                    self.surface
                );
                Cow::Owned(PronunciationVariant::from_surface(&self.surface))
            }
        }
    }

    /// 발음 후보 선택
    pub fn select(&mut self, selected_id: usize) -> Result<(), Error> {
        let count = self.alternative_pronunciations.len();
        if selected_id >= count {
            return Err(Error::VariantOutOfRange {
                index: selected_id,
                count,
            });
        }
        self.selected_id = selected_id;
        Ok(())
    }
}

/// 입력 한 줄
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub original_text: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Line {
    /// 빈 줄 여부
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// 변환 문서
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Document {
    /// JSON 문자열에서 문서 로드
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 특정 단어의 선택된 발음 변경
    pub fn set_selection(
        &mut self,
        line_index: usize,
        word_index: usize,
        selected_id: usize,
    ) -> Result<(), Error> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(line_index)
            .ok_or(Error::LineOutOfRange {
                index: line_index,
                count: line_count,
            })?;

        let word_count = line.words.len();
        let word = line
            .words
            .get_mut(word_index)
            .ok_or(Error::WordOutOfRange {
                line: line_index,
                index: word_index,
                count: word_count,
            })?;

        word.select(selected_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(pron: &str) -> PronunciationVariant {
        PronunciationVariant {
            hangul_pron: pron.to_string(),
            hangul_kana: pron.to_string(),
            ..Default::default()
        }
    }

    fn word(surface: &str, prons: &[&str]) -> Word {
        Word {
            surface: surface.to_string(),
            selected_id: 0,
            alternative_pronunciations: prons.iter().map(|p| variant(p)).collect(),
        }
    }

    #[test]
    fn test_active_variant_selected() {
        let mut w = word("日", &["니치", "히"]);
        assert_eq!(w.active_variant().hangul_pron, "니치");
        w.select(1).unwrap();
        assert_eq!(w.active_variant().hangul_pron, "히");
    }

    #[test]
    fn test_active_variant_fallback() {
        let w = word("♪", &[]);
        let v = w.active_variant();
        assert_eq!(v.hangul_pron, "♪");
        assert_eq!(v.hangul_kana, "♪");
        assert_eq!(v.pos1, "");

        let mut w = word("日", &["니치"]);
        w.selected_id = 5;
        assert_eq!(w.active_variant().hangul_pron, "日");
    }

    #[test]
    fn test_select_out_of_range() {
        let mut w = word("日", &["니치"]);
        assert!(matches!(
            w.select(1),
            Err(Error::VariantOutOfRange { index: 1, count: 1 })
        ));
        assert_eq!(w.selected_id, 0);
    }

    #[test]
    fn test_parse_producer_json() {
        let json = r#"{
            "lines": [
                {
                    "original_text": "空",
                    "word_count": 1,
                    "words": [
                        {
                            "surface": "空",
                            "selected_id": 0,
                            "alternative_pronunciations": [
                                {
                                    "hiragana_pron": "そら",
                                    "hiragana_kana": "そら",
                                    "katakana_pron": "ソラ",
                                    "katakana_kana": "ソラ",
                                    "hangul_pron": "소라",
                                    "hangul_kana": "소라",
                                    "pos1": "名詞",
                                    "pos2": "普通名詞",
                                    "pos3": "一般"
                                }
                            ]
                        }
                    ]
                },
                { "original_text": "", "word_count": 0, "words": [] }
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.lines[0].words[0].active_variant().hangul_pron, "소라");
        assert_eq!(doc.lines[0].words[0].alternative_pronunciations[0].pos1, "名詞");
        assert!(doc.lines[1].is_blank());
    }

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{"lines":[{"original_text":"あ","words":[{"surface":"あ"}]}]}"#;
        let doc = Document::from_json(json).unwrap();
        let w = &doc.lines[0].words[0];
        assert_eq!(w.selected_id, 0);
        assert!(w.alternative_pronunciations.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Document::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_set_selection() {
        let mut doc = Document {
            lines: vec![Line {
                original_text: "日".to_string(),
                word_count: 1,
                words: vec![word("日", &["니치", "히"])],
            }],
        };
        doc.set_selection(0, 0, 1).unwrap();
        assert_eq!(doc.lines[0].words[0].selected_id, 1);

        assert!(matches!(
            doc.set_selection(1, 0, 0),
            Err(Error::LineOutOfRange { index: 1, count: 1 })
        ));
        assert!(matches!(
            doc.set_selection(0, 3, 0),
            Err(Error::WordOutOfRange { line: 0, index: 3, count: 1 })
        ));
        assert!(matches!(
            doc.set_selection(0, 0, 2),
            Err(Error::VariantOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_selection() {
        let mut doc = Document {
            lines: vec![Line {
                original_text: "日".to_string(),
                word_count: 1,
                words: vec![word("日", &["니치", "히"])],
            }],
        };
        doc.set_selection(0, 0, 1).unwrap();
        let parsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
