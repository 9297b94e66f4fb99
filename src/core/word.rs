//! 단어 내부 받침 세분화

use crate::core::clarify::{clarify_nasal, clarify_obstruent, SENTENCE_END};

/// 단어 내부의 응/촉음 세분화 처리
///
/// 고유명사이거나 한 글자 이하인 단어는 그대로 반환한다.
/// 마지막 글자는 응 세분화만 문장 끝(`아`) 기준으로 적용한다.
pub fn process_word_internal(
    text: &str,
    clarify_nasal_flag: bool,
    clarify_obstruent_flag: bool,
    is_proper_noun: bool,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 1 || is_proper_noun {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let mut c = c;
        match chars.get(i + 1) {
            Some(&next) => {
                if clarify_nasal_flag {
                    c = clarify_nasal(c, Some(next));
                }
                if clarify_obstruent_flag {
                    c = clarify_obstruent(c, Some(next));
                }
            }
            None => {
                if clarify_nasal_flag {
                    c = clarify_nasal(c, Some(SENTENCE_END));
                }
            }
        }
        result.push(c);
    }

    result
}
