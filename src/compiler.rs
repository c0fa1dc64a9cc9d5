//! 외부 컴파일러 모듈
//!
//! 파일 하나를 CSS로 컴파일하는 외부 `sass` 프로세스 실행을 담당합니다.

use std::process::Command;

use crate::error::{Result, Sass2CssError};
use crate::paths::Conversion;

/// 기본 컴파일러 실행 파일 이름
pub const SASS_PROGRAM: &str = "sass";

/// 고정 컴파일 옵션 (압축 출력, 소스맵/캐시 끔)
pub const SASS_ARGS: [&str; 5] = [
    "--compass",
    "--style",
    "compressed",
    "--sourcemap=none",
    "--no-cache",
];

/// 파일 하나를 컴파일하는 동작
///
/// 여러 스레드에서 동시에 호출됩니다.
pub trait Compile: Sync {
    fn compile(&self, conversion: &Conversion) -> Result<()>;
}

/// 외부 `sass` 명령을 실행하는 컴파일러
#[derive(Debug, Clone)]
pub struct SassCompiler {
    program: String,
}

impl Default for SassCompiler {
    fn default() -> Self {
        Self::new(SASS_PROGRAM)
    }
}

impl SassCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 변환 작업에 대한 명령 생성
    ///
    /// 입력/출력 경로가 항상 마지막 두 인자입니다.
    pub fn command(&self, conversion: &Conversion) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(SASS_ARGS)
            .arg(&conversion.input)
            .arg(&conversion.output);
        cmd
    }
}

impl Compile for SassCompiler {
    fn compile(&self, conversion: &Conversion) -> Result<()> {
        let status = self
            .command(conversion)
            .status()
            .map_err(|e| Sass2CssError::CompilerLaunch {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Sass2CssError::CompilerFailed {
                file: conversion.input.clone(),
                status,
            });
        }
        Ok(())
    }
}
