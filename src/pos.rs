//! UniDic 품사 태그와 띄어쓰기 판정

use crate::model::PronunciationVariant;

/// 助詞 (조사)
pub const PARTICLE: &str = "助詞";
/// 助動詞 (조동사)
pub const AUXILIARY_VERB: &str = "助動詞";
/// 接尾辞 (접미사)
pub const SUFFIX: &str = "接尾辞";
/// 接頭辞 (접두사)
pub const PREFIX: &str = "接頭辞";
/// 動詞 (동사)
pub const VERB: &str = "動詞";
/// 非自立 (비자립)
pub const DEPENDENT: &str = "非自立";
/// 非自立可能 (비자립 가능)
pub const DEPENDENT_POSSIBLE: &str = "非自立可能";
/// 接続助詞 (접속조사)
pub const CONJUNCTIVE_PARTICLE: &str = "接続助詞";
/// 数詞 (수사)
pub const NUMERAL: &str = "数詞";
/// 助数詞可能 (조수사 가능)
pub const COUNTER_POSSIBLE: &str = "助数詞可能";
/// 固有名詞 (고유명사)
pub const PROPER_NOUN: &str = "固有名詞";

/// 고유명사 여부 (발음 세분화 제외 대상)
pub fn is_proper_noun(variant: &PronunciationVariant) -> bool {
    variant.pos2 == PROPER_NOUN
}

/// 앞 단어와 붙여 써야 하는지
pub fn suppresses_space(prev: &PronunciationVariant, current: &PronunciationVariant) -> bool {
    let pos1 = current.pos1.as_str();
    let pos2 = current.pos2.as_str();
    let pos3 = current.pos3.as_str();
    let prev_pos1 = prev.pos1.as_str();
    let prev_pos2 = prev.pos2.as_str();

    matches!(pos1, PARTICLE | AUXILIARY_VERB | SUFFIX)
        || pos2 == DEPENDENT
        || (prev_pos1 != PARTICLE && pos2 == DEPENDENT_POSSIBLE)
        // 接続助詞 뒤의 動詞는 보조동사
        || (prev_pos2 == CONJUNCTIVE_PARTICLE && pos1 == VERB)
        || prev_pos1 == PREFIX
        || (prev_pos2 == NUMERAL && (pos2 == NUMERAL || pos3 == COUNTER_POSSIBLE))
}
