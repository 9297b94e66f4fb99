//! 복사/내보내기용 텍스트 생성

use crate::core::composer::{render_line, RenderOptions};
use crate::model::Document;

/// 내보낼 줄 목록
///
/// 빈 줄은 빈 문자열 하나, 그 외에는 (원문 표시 시) 원문 다음에 변환 결과.
pub fn export_lines(doc: &Document, options: &RenderOptions, show_original: bool) -> Vec<String> {
    let mut result = Vec::with_capacity(doc.lines.len() * 2);

    for line in &doc.lines {
        if line.is_blank() {
            result.push(String::new());
            continue;
        }
        if show_original {
            result.push(line.original_text.clone());
        }
        result.push(render_line(line, options));
    }

    result
}

/// 클립보드에 복사할 전체 텍스트
pub fn export_text(doc: &Document, options: &RenderOptions, show_original: bool) -> String {
    export_lines(doc, options, show_original).join("\n")
}
