//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// sass2css CLI 인자 구조체
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sass2css",
    author = "YourName <your@email.com>",
    version,
    about = "SASS FOLDER TO CSS CONVERTER - 폴더 내 SASS 파일들을 CSS 폴더로 컴파일하는 CLI 도구",
    long_about = r#"
SASS FOLDER TO CSS CONVERTER
============================

입력 폴더를 탐색하여 모든 파일을 외부 `sass` 컴파일러로
출력 폴더의 같은 위치에 CSS로 컴파일합니다.

특징:
  • 파일마다 병렬로 컴파일러 실행
  • 무시할 폴더 이름 지정 (기본값: lib, inc)
  • 주기적 재컴파일 (--watch)

예제:
  sass2css -i sass -o css
  sass2css -i assets/sass -o public/css --ignore "lib,inc,vendor"
  sass2css --watch --interval 500
  sass2css --dry-run
"#
)]
pub struct Args {
    /// SASS 파일들이 있는 입력 폴더 (작업 디렉토리 기준)
    #[arg(short, long, default_value = "sass")]
    pub input: PathBuf,

    /// CSS 파일이 생성될 출력 폴더 (작업 디렉토리 기준)
    #[arg(short, long, default_value = "css")]
    pub output: PathBuf,

    /// 무시할 폴더 이름 (쉼표로 구분, 기본값: lib,inc)
    #[arg(long)]
    pub ignore: Option<String>,

    /// 변환을 주기적으로 반복
    #[arg(short = 'l', long = "watch")]
    pub watch: bool,

    /// 반복 간격 (밀리초)
    #[arg(long, default_value_t = 2000)]
    pub interval: u64,

    /// 실제 컴파일 없이 변환될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 상세 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}
