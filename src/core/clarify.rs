//! 받침 발음 세분화 규칙
//!
//! - 응(ん) 세분화: ㄴ/ㅇ/ㅁ 받침을 다음 글자의 초성에 맞춰 ㄴ, ㅇ, ㅁ 중 하나로 정한다.
//! - 촉음(っ) 세분화: ㅅ/ㄱ/ㄷ/ㅂ/ㄹ 받침을 다음 글자의 초성에 맞춰 정한다.
//!
//! 두 규칙 모두 (현재 글자, 다음 글자)에 대한 순수 함수이며,
//! 다음 글자가 없으면(`None`) 문장 끝으로 취급한다.

use crate::core::unicode::{cho, jong, Syllable};

/// 문장 끝과 같은 효과를 내는 가상의 다음 글자
pub const SENTENCE_END: char = '아';

/// 응 세분화 대상 받침인지 (ㄴ, ㅇ, ㅁ)
fn is_nasal_jongseong(jongseong: u32) -> bool {
    matches!(jongseong, jong::NIEUN | jong::IEUNG | jong::MIEUM)
}

/// 촉음 세분화 대상 받침인지 (ㅅ, ㄱ, ㄷ, ㅂ, ㄹ)
fn is_obstruent_jongseong(jongseong: u32) -> bool {
    matches!(
        jongseong,
        jong::SIOS | jong::GIYEOK | jong::DIGEUT | jong::BIEUP | jong::RIEUL
    )
}

/// 응(ㄴ) 세분화: ㄴ, ㅇ, ㅁ 받침을 다음 글자에 따라 변환
///
/// | 다음 글자 | 받침 |
/// |---|---|
/// | 공백, `아`, 없음 | ㅇ |
/// | 초성 ㄱ/ㅋ/ㅇ | ㅇ |
/// | 초성 ㅁ/ㅂ/ㅍ | ㅁ |
/// | 그 외 음절, 완성형이 아닌 문자 | ㄴ |
pub fn clarify_nasal(c: char, next: Option<char>) -> char {
    let Some(syllable) = Syllable::from_char(c) else {
        return c;
    };
    if !is_nasal_jongseong(syllable.jongseong) {
        return c;
    }

    let jongseong = match next {
        None | Some(' ') | Some(SENTENCE_END) => jong::IEUNG,
        Some(n) => match Syllable::from_char(n).map(|s| s.choseong) {
            Some(cho::GIYEOK | cho::KIEUK | cho::IEUNG) => jong::IEUNG,
            Some(cho::MIEUM | cho::BIEUP | cho::PIEUP) => jong::MIEUM,
            _ => jong::NIEUN,
        },
    };

    syllable.with_jongseong(jongseong).to_char().unwrap_or(c)
}

/// 촉음(ㅅ) 세분화: ㅅ, ㄱ, ㄷ, ㅂ, ㄹ 받침을 다음 글자에 따라 변환
///
/// 다음 글자가 공백이거나 없으면 그대로 둔다.
/// 다음 글자가 완성형이 아니어도 그대로 둔다.
pub fn clarify_obstruent(c: char, next: Option<char>) -> char {
    let Some(syllable) = Syllable::from_char(c) else {
        return c;
    };
    if !is_obstruent_jongseong(syllable.jongseong) {
        return c;
    }

    let Some(next_syllable) = next.filter(|&n| n != ' ').and_then(Syllable::from_char) else {
        return c;
    };

    let jongseong = match next_syllable.choseong {
        cho::KIEUK => jong::GIYEOK,
        cho::TIEUT => jong::DIGEUT,
        cho::PIEUP => jong::BIEUP,
        cho::RIEUL => jong::RIEUL,
        _ => jong::SIOS,
    };

    syllable.with_jongseong(jongseong).to_char().unwrap_or(c)
}

/// 활성화된 규칙을 순서대로(응 → 촉음) 적용
pub fn clarify(c: char, next: Option<char>, nasal: bool, obstruent: bool) -> char {
    let mut c = c;
    if nasal {
        c = clarify_nasal(c, next);
    }
    if obstruent {
        c = clarify_obstruent(c, next);
    }
    c
}
