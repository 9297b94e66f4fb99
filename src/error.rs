//! 에러 타입
//!
//! 렌더링 경로는 실패하지 않는다. 에러는 문서/설정 입출력과 선택 변경에서만 생긴다.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱/직렬화 실패
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("줄 인덱스 범위 초과: {index} (총 {count}줄)")]
    LineOutOfRange { index: usize, count: usize },

    #[error("단어 인덱스 범위 초과: {line}번째 줄의 {index} (총 {count}개)")]
    WordOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },

    #[error("발음 후보 인덱스 범위 초과: {index} (총 {count}개)")]
    VariantOutOfRange { index: usize, count: usize },
}
