//! 에러 타입 정의 모듈
//!
//! sass2css에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// sass2css에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum Sass2CssError {
    /// 현재 작업 디렉토리를 확인할 수 없음
    #[error("현재 작업 디렉토리를 확인할 수 없습니다: {reason}")]
    CurrentDir { reason: String },

    /// 폴더 탐색 실패 (패스 전체 중단)
    #[error("폴더 탐색 실패 ({path}): {reason}")]
    Walk { path: PathBuf, reason: String },

    /// 입력 루트 밖의 파일
    #[error("입력 폴더 밖의 파일입니다: {file}")]
    StripPrefix { file: PathBuf },

    /// 출력 폴더 생성 실패
    #[error("출력 폴더를 만들 수 없습니다 ({path}): {reason}")]
    CreateDir { path: PathBuf, reason: String },

    /// 컴파일러 실행 실패
    #[error("컴파일러를 실행할 수 없습니다 ({program}): {reason}")]
    CompilerLaunch { program: String, reason: String },

    /// 컴파일러가 0이 아닌 상태로 종료
    #[error("컴파일 실패 ({file}): {status}")]
    CompilerFailed { file: PathBuf, status: ExitStatus },
}

/// sass2css 결과 타입 별칭
pub type Result<T> = std::result::Result<T, Sass2CssError>;
