//! hanyomi - 일본어 가사 발음 후보를 한글 가사로 출력

use anyhow::{Context, Result};
use clap::Parser;
use hanyomi::config::{config_path, load_config_from, save_config_to, HanyomiConfig};
use hanyomi::{export_text, Document};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// 발음 선택 (줄:단어:후보)
#[derive(Debug, Clone, Copy)]
struct Selection {
    line: usize,
    word: usize,
    selected_id: usize,
}

fn parse_selection(s: &str) -> Result<Selection, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [line, word, selected_id] = parts.as_slice() else {
        return Err(format!("LINE:WORD:ID 형식이 아닙니다: {}", s));
    };
    let number = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("잘못된 숫자 '{}': {}", v, e))
    };
    Ok(Selection {
        line: number(*line)?,
        word: number(*word)?,
        selected_id: number(*selected_id)?,
    })
}

/// Render a tokenized Japanese document (JSON) as Korean Hangul lyrics.
///
/// Options default to the saved config file; flags override them for this run.
#[derive(Parser, Debug)]
#[command(name = "hanyomi", version, about)]
struct CommandLineOptions {
    /// Document JSON file (stdin if omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Mark long vowels with a hyphen
    #[arg(long, overrides_with = "no_hyphen")]
    hyphen: bool,

    /// Spell long vowels by repeating the vowel instead of a hyphen
    #[arg(long, overrides_with = "hyphen")]
    no_hyphen: bool,

    /// Insert spaces between words by part of speech
    #[arg(long, overrides_with = "no_spacing")]
    spacing: bool,

    /// Do not insert spaces between words
    #[arg(long, overrides_with = "spacing")]
    no_spacing: bool,

    /// Resolve ん codas to ㄴ/ㅇ/ㅁ by the following consonant
    #[arg(long, overrides_with = "no_clarify_nasal")]
    clarify_nasal: bool,

    /// Keep ん codas as written
    #[arg(long, overrides_with = "clarify_nasal")]
    no_clarify_nasal: bool,

    /// Resolve っ codas by the following consonant
    #[arg(long, overrides_with = "no_clarify_obstruent")]
    clarify_obstruent: bool,

    /// Keep っ codas as written
    #[arg(long, overrides_with = "clarify_obstruent")]
    no_clarify_obstruent: bool,

    /// Print each original line above its rendering
    #[arg(long, overrides_with = "hide_original")]
    show_original: bool,

    /// Print only the rendered lines
    #[arg(long, overrides_with = "show_original")]
    hide_original: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the effective options to the configuration file
    #[arg(long)]
    save_config: bool,

    /// Choose a pronunciation candidate, e.g. 0:2:1 (repeatable)
    #[arg(short, long, value_name = "LINE:WORD:ID", value_parser = parse_selection)]
    select: Vec<Selection>,
}

/// 켜기/끄기 플래그 쌍 (둘 다 없으면 None, 나중 플래그가 이김)
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// 저장된 설정에 명령줄 플래그 반영
fn apply(options: &CommandLineOptions, config: &mut HanyomiConfig) {
    let overrides = [
        (toggle(options.hyphen, options.no_hyphen), &mut config.use_hyphen),
        (toggle(options.spacing, options.no_spacing), &mut config.insert_spacing),
        (
            toggle(options.clarify_nasal, options.no_clarify_nasal),
            &mut config.clarify_nasal,
        ),
        (
            toggle(options.clarify_obstruent, options.no_clarify_obstruent),
            &mut config.clarify_obstruent,
        ),
        (
            toggle(options.show_original, options.hide_original),
            &mut config.show_original,
        ),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("입력 파일 읽기 실패: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("표준 입력 읽기 실패")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CommandLineOptions::parse();

    // 설정 로드 후 플래그로 덮어쓰기
    let path = options.config.clone().unwrap_or_else(config_path);
    let mut config = load_config_from(&path);
    apply(&options, &mut config);

    if options.save_config {
        save_config_to(&config, &path)
            .with_context(|| format!("설정 저장 실패: {}", path.display()))?;
        log::info!("설정 저장: {}", path.display());
    }

    let json = read_input(options.input.as_ref())?;
    let mut document = Document::from_json(&json).context("문서 JSON 파싱 실패")?;

    for s in &options.select {
        document
            .set_selection(s.line, s.word, s.selected_id)
            .with_context(|| format!("발음 선택 실패: {}:{}:{}", s.line, s.word, s.selected_id))?;
    }

    let text = export_text(&document, &config.render_options(), config.show_original);
    println!("{}", text);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let s = parse_selection("1:2:3").unwrap();
        assert_eq!((s.line, s.word, s.selected_id), (1, 2, 3));
        assert!(parse_selection("1:2").is_err());
        assert!(parse_selection("a:2:3").is_err());
    }

    fn applied(args: &[&str], saved: &HanyomiConfig) -> HanyomiConfig {
        let options = CommandLineOptions::try_parse_from(args).unwrap();
        let mut config = saved.clone();
        apply(&options, &mut config);
        config
    }

    #[test]
    fn test_flags_turn_options_back_on() {
        // --no-hyphen 등으로 저장된 설정을 다시 켤 수 있어야 한다
        let saved = HanyomiConfig {
            use_hyphen: false,
            insert_spacing: false,
            clarify_nasal: false,
            clarify_obstruent: false,
            show_original: true,
        };
        let config = applied(
            &[
                "hanyomi",
                "--hyphen",
                "--spacing",
                "--clarify-nasal",
                "--clarify-obstruent",
                "--hide-original",
            ],
            &saved,
        );
        assert_eq!(config, HanyomiConfig::default());
    }

    #[test]
    fn test_flags_turn_options_off() {
        let config = applied(
            &[
                "hanyomi",
                "--no-hyphen",
                "--no-spacing",
                "--no-clarify-nasal",
                "--no-clarify-obstruent",
                "--show-original",
            ],
            &HanyomiConfig::default(),
        );
        assert!(!config.use_hyphen);
        assert!(!config.insert_spacing);
        assert!(!config.clarify_nasal);
        assert!(!config.clarify_obstruent);
        assert!(config.show_original);
    }

    #[test]
    fn test_no_flags_keep_saved_config() {
        let saved = HanyomiConfig {
            use_hyphen: false,
            ..HanyomiConfig::default()
        };
        assert_eq!(applied(&["hanyomi"], &saved), saved);
    }

    #[test]
    fn test_last_flag_wins() {
        let config = applied(&["hanyomi", "--no-hyphen", "--hyphen"], &HanyomiConfig::default());
        assert!(config.use_hyphen);
        let config = applied(&["hanyomi", "--hyphen", "--no-hyphen"], &HanyomiConfig::default());
        assert!(!config.use_hyphen);
    }
}
