//! 변환 드라이버 모듈
//!
//! 입력 폴더를 탐색하여 파일마다 컴파일러를 병렬로 실행하고,
//! 모든 변환이 끝날 때까지 기다리는 패스를 담당합니다.

use std::fs;
use std::path::Path;
use std::thread;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::compiler::{Compile, SassCompiler};
use crate::config::Config;
use crate::error::{Result, Sass2CssError};
use crate::ignore::IgnoreSet;
use crate::paths::Conversion;
use crate::stats::{print_banner, PassReport, PassStats};

/// 변환 드라이버
pub struct Driver<C: Compile = SassCompiler> {
    config: Config,
    compiler: C,
}

impl Driver<SassCompiler> {
    /// 외부 `sass` 컴파일러를 사용하는 드라이버 생성
    pub fn new(config: Config) -> Self {
        Self::with_compiler(config, SassCompiler::default())
    }
}

impl<C: Compile> Driver<C> {
    pub fn with_compiler(config: Config, compiler: C) -> Self {
        Self { config, compiler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// 패스 실행 (watch 모드이면 종료하지 않음)
    pub fn run(&self) -> Result<()> {
        self.run_passes(None)
    }

    /// 최대 `limit`번까지 패스 실행
    fn run_passes(&self, limit: Option<usize>) -> Result<()> {
        let mut passes = 0usize;

        loop {
            let report = self.run_pass()?;
            print_banner();
            report.print_summary();
            passes += 1;

            if !self.config.watch || self.config.dry_run {
                break;
            }
            if limit.is_some_and(|n| passes >= n) {
                break;
            }

            debug!(interval_ms = self.config.interval.as_millis() as u64, "다음 패스 대기");
            thread::sleep(self.config.interval);
        }

        Ok(())
    }

    /// 한 패스 실행
    ///
    /// 탐색은 현재 스레드에서 순서대로 진행되고, 파일마다 변환 작업 하나를
    /// rayon 스코프에 띄웁니다. 스코프가 끝나면 모든 변환이 끝난 상태입니다.
    /// 탐색 에러는 이미 띄운 변환을 기다린 뒤 반환됩니다.
    pub fn run_pass(&self) -> Result<PassReport> {
        let config = &self.config;
        let compiler = &self.compiler;
        let stats = PassStats::new(!config.dry_run);
        let progress = &stats;

        info!(input = %config.input_dir.display(), "패스 시작");

        let walked: Result<()> = rayon::scope(|scope| {
            let walker = WalkDir::new(&config.input_dir)
                .into_iter()
                .filter_entry(|e| !is_ignored(e, &config.ignore));

            for entry in walker {
                let entry = entry.map_err(|e| walk_error(e, &config.input_dir))?;
                if entry.file_type().is_dir() {
                    continue;
                }

                let conversion =
                    Conversion::new(&config.input_dir, &config.output_dir, entry.into_path())?;
                progress.record_dispatch(&conversion);

                if config.dry_run {
                    continue;
                }

                scope.spawn(move |_| {
                    convert(compiler, &conversion);
                    progress.record_finish();
                });
            }

            Ok(())
        });

        debug!(in_flight = stats.in_flight(), "패스 합류");
        let report = stats.finish();
        walked?;
        Ok(report)
    }
}

/// 무시할 폴더인지 확인 (하위 트리 전체 제외)
fn is_ignored(entry: &DirEntry, ignore: &IgnoreSet) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore.matches(name))
}

fn walk_error(err: walkdir::Error, root: &Path) -> Sass2CssError {
    Sass2CssError::Walk {
        path: err.path().unwrap_or(root).to_path_buf(),
        reason: err.to_string(),
    }
}

/// 변환 작업 하나 실행
///
/// 실패는 패스를 멈추지 않습니다. 상세 로그에만 남깁니다.
fn convert<C: Compile>(compiler: &C, conversion: &Conversion) {
    if let Some(parent) = conversion.output.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            let err = Sass2CssError::CreateDir {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            };
            debug!(error = %err, "출력 폴더 생성 실패 (무시)");
        }
    }

    if let Err(err) = compiler.compile(conversion) {
        debug!(error = %err, "변환 실패 (무시)");
    }
}
