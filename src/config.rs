//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::composer::RenderOptions;
use crate::error::Error;

/// 출력 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HanyomiConfig {
    /// 장음을 하이픈(-)으로 표시
    #[serde(default = "default_true")]
    pub use_hyphen: bool,
    /// 품사에 따라 띄어쓰기
    #[serde(default = "default_true")]
    pub insert_spacing: bool,
    /// 응(ん) 발음 세분화
    #[serde(default = "default_true")]
    pub clarify_nasal: bool,
    /// 촉음(っ) 발음 세분화
    #[serde(default = "default_true")]
    pub clarify_obstruent: bool,
    /// 내보낼 때 원문 줄 함께 출력
    #[serde(default)]
    pub show_original: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HanyomiConfig {
    fn default() -> Self {
        Self {
            use_hyphen: true,
            insert_spacing: true,
            clarify_nasal: true,
            clarify_obstruent: true,
            show_original: false,
        }
    }
}

impl HanyomiConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            use_hyphen_form: self.use_hyphen,
            insert_spacing: self.insert_spacing,
            clarify_nasal: self.clarify_nasal,
            clarify_obstruent: self.clarify_obstruent,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hanyomi/config.json 또는 ~/.config/hanyomi/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |key: &str| {
        std::env::var(key)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));

    base.join("hanyomi").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HanyomiConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> HanyomiConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            HanyomiConfig::default()
        }),
        Err(_) => HanyomiConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HanyomiConfig) -> Result<(), Error> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(config: &HanyomiConfig, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HanyomiConfig::default();
        assert!(config.use_hyphen);
        assert!(config.clarify_nasal);
        assert!(!config.show_original);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 세분화 항목이 없는 경우 기본값 사용
        let json = r#"{"use_hyphen": false, "show_original": true}"#;
        let config: HanyomiConfig = serde_json::from_str(json).unwrap();
        assert!(!config.use_hyphen);
        assert!(config.show_original);
        assert!(config.insert_spacing);
        assert!(config.clarify_obstruent);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = HanyomiConfig {
            clarify_nasal: false,
            show_original: true,
            ..HanyomiConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_missing_or_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(load_config_from(&path), HanyomiConfig::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), HanyomiConfig::default());
    }
}
