//! 경로 변환 모듈
//!
//! 입력 파일 경로를 출력 폴더의 CSS 파일 경로로 바꿉니다.

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Result, Sass2CssError};

/// 제거할 원본 확장자
pub const SOURCE_SUFFIX: &str = ".sass";

/// 붙일 출력 확장자
pub const OUTPUT_SUFFIX: &str = ".css";

/// 하나의 파일 변환 작업
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// 입력 파일 (절대 경로)
    pub input: PathBuf,
    /// 출력 파일 (절대 경로)
    pub output: PathBuf,
}

impl Conversion {
    /// 입력 파일에 대한 변환 작업 생성
    pub fn new(input_root: &Path, output_root: &Path, input: PathBuf) -> Result<Self> {
        let output = output_path(input_root, output_root, &input)?;
        Ok(Self { input, output })
    }

    /// 진행 상황 한 줄 (`<입력> -> <출력>`)
    pub fn progress_line(&self) -> String {
        format!("{} -> {}", to_slash(&self.input), to_slash(&self.output))
    }
}

/// 출력 파일 경로 계산
///
/// 입력 루트 기준 상대 경로를 출력 루트 아래로 옮기고, 끝의 `.sass`를 떼고
/// `.css`를 붙입니다. `.sass`로 끝나지 않아도 `.css`는 붙습니다.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use sass2css::paths::output_path;
///
/// let out = output_path(Path::new("/w/sass"), Path::new("/w/css"), Path::new("/w/sass/sub/c.sass")).unwrap();
/// assert_eq!(out, PathBuf::from("/w/css/sub/c.css"));
/// ```
pub fn output_path(input_root: &Path, output_root: &Path, file: &Path) -> Result<PathBuf> {
    let relative = file
        .strip_prefix(input_root)
        .map_err(|_| Sass2CssError::StripPrefix {
            file: file.to_path_buf(),
        })?;

    let mut out: OsString = output_root.join(relative).into_os_string();
    if let Some(stripped) = out.to_str().and_then(|s| s.strip_suffix(SOURCE_SUFFIX)) {
        out = OsString::from(stripped);
    }
    out.push(OUTPUT_SUFFIX);

    Ok(PathBuf::from(out))
}

/// 경로를 `/` 구분자 문자열로 변환
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(file: &str) -> PathBuf {
        output_path(Path::new("/w/sass"), Path::new("/w/css"), Path::new(file)).unwrap()
    }

    #[test]
    fn test_top_level_file() {
        assert_eq!(out("/w/sass/a.sass"), PathBuf::from("/w/css/a.css"));
    }

    #[test]
    fn test_nested_file() {
        assert_eq!(out("/w/sass/sub/deep/c.sass"), PathBuf::from("/w/css/sub/deep/c.css"));
    }

    #[test]
    fn test_other_suffix_still_gets_css() {
        assert_eq!(out("/w/sass/theme.scss"), PathBuf::from("/w/css/theme.scss.css"));
        assert_eq!(out("/w/sass/README"), PathBuf::from("/w/css/README.css"));
    }

    #[test]
    fn test_only_trailing_suffix_stripped() {
        assert_eq!(out("/w/sass/x.sass.bak"), PathBuf::from("/w/css/x.sass.bak.css"));
        assert_eq!(out("/w/sass/a.sass.sass"), PathBuf::from("/w/css/a.sass.css"));
    }

    #[test]
    fn test_outside_root() {
        let result = output_path(Path::new("/w/sass"), Path::new("/w/css"), Path::new("/etc/x.sass"));
        assert!(matches!(result, Err(Sass2CssError::StripPrefix { .. })));
    }

    #[test]
    fn test_progress_line() {
        let conversion = Conversion::new(
            Path::new("/w/sass"),
            Path::new("/w/css"),
            PathBuf::from("/w/sass/sub/c.sass"),
        )
        .unwrap();
        assert_eq!(conversion.progress_line(), "/w/sass/sub/c.sass -> /w/css/sub/c.css");
    }
}
