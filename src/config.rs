//! 설정 모듈
//!
//! CLI 인자와 현재 작업 디렉토리로부터 실행 설정을 만듭니다.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use crate::error::{Result, Sass2CssError};
use crate::ignore::IgnoreSet;

/// 실행 설정 (시작 후 변경되지 않음)
#[derive(Debug, Clone)]
pub struct Config {
    /// 입력 루트 (절대 경로)
    pub input_dir: PathBuf,
    /// 출력 루트 (절대 경로)
    pub output_dir: PathBuf,
    pub ignore: IgnoreSet,
    /// 반복 실행 여부
    pub watch: bool,
    /// 반복 간격
    pub interval: Duration,
    /// 드라이런 모드
    pub dry_run: bool,
    /// 병렬 처리 스레드 수
    pub threads: Option<usize>,
}

impl Config {
    /// 현재 작업 디렉토리를 기준으로 설정 생성
    pub fn from_args(args: &Args) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Sass2CssError::CurrentDir {
            reason: e.to_string(),
        })?;
        Ok(Self::resolve(args, &cwd))
    }

    /// 주어진 작업 디렉토리를 기준으로 설정 생성
    ///
    /// 입력/출력 경로가 이미 절대 경로이면 그대로 사용합니다.
    pub fn resolve(args: &Args, cwd: &Path) -> Self {
        Self {
            input_dir: cwd.join(&args.input),
            output_dir: cwd.join(&args.output),
            ignore: IgnoreSet::from_option(args.ignore.as_deref()),
            watch: args.watch,
            interval: Duration::from_millis(args.interval),
            dry_run: args.dry_run,
            threads: args.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sass2css").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_relative_dirs() {
        let cwd = Path::new("/work/site");
        let config = Config::resolve(&parse(&[]), cwd);

        assert_eq!(config.input_dir, PathBuf::from("/work/site/sass"));
        assert_eq!(config.output_dir, PathBuf::from("/work/site/css"));
        assert_eq!(config.ignore, IgnoreSet::default());
        assert_eq!(config.interval, Duration::from_millis(2000));
        assert!(!config.watch);
    }

    #[test]
    fn test_resolve_absolute_dirs() {
        let cwd = Path::new("/work/site");
        let config = Config::resolve(&parse(&["-i", "/srv/styles", "-o", "public/css"]), cwd);

        assert_eq!(config.input_dir, PathBuf::from("/srv/styles"));
        assert_eq!(config.output_dir, PathBuf::from("/work/site/public/css"));
    }

    #[test]
    fn test_resolve_ignore_and_watch() {
        let cwd = Path::new("/work");
        let config = Config::resolve(&parse(&["--ignore", "vendor", "-l", "--interval", "100"]), cwd);

        assert!(config.ignore.matches("vendor"));
        assert!(!config.ignore.matches("lib"));
        assert!(config.watch);
        assert_eq!(config.interval, Duration::from_millis(100));
    }

    #[test]
    fn test_from_args_is_absolute() {
        let config = Config::from_args(&parse(&[])).unwrap();
        assert!(config.input_dir.is_absolute());
        assert!(config.output_dir.is_absolute());
    }
}
