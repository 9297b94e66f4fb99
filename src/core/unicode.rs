//! 유니코드 한글 음절 분해/조합
//!
//! 완성형 음절(U+AC00 ~ U+D7A3)을 초성/중성/종성 인덱스로 다루는 유틸리티.
//! 음절 영역 밖의 문자는 분해되지 않고 그대로 통과한다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
pub mod cho {
    pub const GIYEOK: u32 = 0;
    pub const RIEUL: u32 = 5;
    pub const MIEUM: u32 = 6;
    pub const BIEUP: u32 = 7;
    pub const IEUNG: u32 = 11;
    pub const KIEUK: u32 = 15;
    pub const TIEUT: u32 = 16;
    pub const PIEUP: u32 = 17;
}

/// 종성 인덱스 (0 = 없음)
/// ㄱ(1) ㄴ(4) ㄷ(7) ㄹ(8) ㅁ(16) ㅂ(17) ㅅ(19) ㅇ(21)
pub mod jong {
    pub const GIYEOK: u32 = 1;
    pub const NIEUN: u32 = 4;
    pub const DIGEUT: u32 = 7;
    pub const RIEUL: u32 = 8;
    pub const MIEUM: u32 = 16;
    pub const BIEUP: u32 = 17;
    pub const SIOS: u32 = 19;
    pub const IEUNG: u32 = 21;
}

/// 분해된 완성형 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub choseong: u32,
    pub jungseong: u32,
    pub jongseong: u32,
}

impl Syllable {
    /// 완성형 한글 문자를 분해 (음절 영역 밖이면 None)
    pub fn from_char(c: char) -> Option<Self> {
        decompose_syllable(c).map(|(choseong, jungseong, jongseong)| Self {
            choseong,
            jungseong,
            jongseong,
        })
    }

    /// 종성만 교체한 음절
    pub fn with_jongseong(self, jongseong: u32) -> Self {
        Self { jongseong, ..self }
    }

    /// 초성만 교체한 음절
    pub fn with_choseong(self, choseong: u32) -> Self {
        Self { choseong, ..self }
    }

    /// 다시 완성형 문자로 조합
    pub fn to_char(self) -> Option<char> {
        compose_syllable(self.choseong, self.jungseong, self.jongseong)
    }
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}
