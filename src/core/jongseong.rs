//! 단독 받침 자모(ㅅ, ㄴ)를 앞 음절에 붙이기
//!
//! 촉음과 ん이 앞 글자와 합쳐지지 못하고 낱자모로 남은 경우
//! (단어 첫 글자였거나 단어 경계에 걸린 경우) 줄 단위로 다시 앞 음절의 받침으로 옮긴다.

use crate::core::clarify::clarify;
use crate::core::composer::RenderOptions;
use crate::core::unicode::{cho, jong, Syllable};

/// 장음 표시 문자
pub const LONG_VOWEL_MARK: char = '-';

/// 단독 자모를 받침 인덱스로 변환 (붙일 대상이 아니면 None)
fn marker_jongseong(c: char) -> Option<u32> {
    match c {
        'ㅅ' => Some(jong::SIOS),
        'ㄴ' => Some(jong::NIEUN),
        _ => None,
    }
}

/// 단독 ㅅ, ㄴ을 앞 글자에 받침으로 추가
///
/// - 앞 글자가 공백이면 공백을 지우고 그 앞 글자에 붙인다.
/// - 앞 글자가 장음 표시(`-`)면 그 앞 음절의 모음을 초성 ㅇ으로 이어 받침을 붙인다.
/// - 붙인 뒤 다음 글자가 있으면 응/촉음 세분화를 다시 적용한다.
pub fn attach_jongseong(text: &str, options: &RenderOptions) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 1 {
        return text.to_string();
    }

    let mut result: Vec<char> = Vec::with_capacity(chars.len());

    for (i, &current) in chars.iter().enumerate() {
        if i > 0 {
            if let Some(jongseong) = marker_jongseong(current) {
                let mut target_index = i - 1;

                // 앞 글자가 공백인 경우 건너뛰기
                if chars[target_index] == ' ' && i > 1 {
                    target_index -= 1;
                    result.pop();
                }

                // 장음 하이픈이면 그 앞 음절을 기준으로 초성 ㅇ
                let is_long_vowel = chars[target_index] == LONG_VOWEL_MARK;
                let target = if is_long_vowel && target_index > 0 {
                    chars[target_index - 1]
                } else {
                    chars[target_index]
                };

                if let Some(syllable) = Syllable::from_char(target) {
                    let syllable = if is_long_vowel {
                        syllable.with_choseong(cho::IEUNG)
                    } else {
                        syllable
                    };

                    if let Some(mut attached) = syllable.with_jongseong(jongseong).to_char() {
                        if let Some(&next) = chars.get(i + 1) {
                            attached = clarify(
                                attached,
                                Some(next),
                                options.clarify_nasal,
                                options.clarify_obstruent,
                            );
                        }
                        log::debug!("받침 {} 부착: {} -> {}", current, target, attached);

                        result.pop();
                        result.push(attached);
                        continue;
                    }
                }
            }
        }

        result.push(current);
    }

    result.into_iter().collect()
}
