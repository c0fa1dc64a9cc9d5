//! sass2css - SASS FOLDER TO CSS CONVERTER
//!
//! 입력 폴더의 파일들을 외부 `sass` 컴파일러로 출력 폴더의 같은 위치에
//! CSS로 컴파일하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **병렬 처리**: 파일마다 변환 작업을 띄우고 패스 끝에서 모두 기다림
//! - 🚫 **폴더 무시**: 이름이 일치하는 폴더의 하위 트리 전체 제외 (기본값: lib, inc)
//! - 🔁 **반복 실행**: 일정 간격으로 전체 트리 재컴파일 (`--watch`)
//! - 🧪 **드라이런 모드**: 실제 컴파일 없이 변환될 파일 목록 미리 확인
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (./sass -> ./css)
//! sass2css
//!
//! # 폴더 지정 및 반복 실행
//! sass2css -i assets/sass -o public/css --watch --interval 500
//!
//! # 아무 폴더도 무시하지 않기
//! sass2css --ignore ""
//! ```

pub mod cli;
pub mod compiler;
pub mod config;
pub mod driver;
pub mod error;
pub mod ignore;
pub mod paths;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use compiler::{Compile, SassCompiler};
pub use config::Config;
pub use driver::Driver;
pub use error::{Result, Sass2CssError};
pub use ignore::IgnoreSet;
pub use paths::{output_path, Conversion};
pub use stats::{format_duration, PassReport};
