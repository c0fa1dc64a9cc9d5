//! 무시 폴더 모듈
//!
//! 탐색에서 제외할 폴더 이름 집합을 담당합니다.

use std::collections::BTreeSet;

/// 기본으로 무시하는 폴더 이름
pub const DEFAULT_IGNORED: [&str; 2] = ["lib", "inc"];

/// 무시할 폴더 이름 집합
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IgnoreSet {
    /// 쉼표로 구분된 목록에서 집합 생성
    ///
    /// 빈 항목은 버립니다. 따라서 빈 문자열은 아무 폴더도 무시하지 않습니다.
    ///
    /// # Examples
    /// ```
    /// use sass2css::ignore::IgnoreSet;
    ///
    /// let set = IgnoreSet::parse("vendor, build");
    /// assert!(set.matches("vendor"));
    /// assert!(set.matches("build"));
    /// assert!(!set.matches("lib"));
    /// ```
    pub fn parse(list: &str) -> Self {
        Self {
            names: list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// CLI 값에서 집합 생성 (None이면 기본값)
    pub fn from_option(list: Option<&str>) -> Self {
        list.map(Self::parse).unwrap_or_default()
    }

    /// 폴더 이름이 집합에 포함되는지 확인
    pub fn matches(&self, dir_name: &str) -> bool {
        self.names.contains(dir_name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 이름 목록 (정렬됨)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl std::fmt::Display for IgnoreSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = IgnoreSet::default();
        assert!(set.matches("lib"));
        assert!(set.matches("inc"));
        assert!(!set.matches("sub"));
    }

    #[test]
    fn test_override_replaces_default() {
        let set = IgnoreSet::from_option(Some("vendor"));
        assert!(set.matches("vendor"));
        assert!(!set.matches("lib"));
        assert!(!set.matches("inc"));
    }

    #[test]
    fn test_empty_override() {
        let set = IgnoreSet::from_option(Some(""));
        assert!(set.is_empty());
        assert!(!set.matches("lib"));
        assert!(!set.matches(""));
    }

    #[test]
    fn test_exact_name_match() {
        let set = IgnoreSet::parse("lib");
        assert!(!set.matches("library"));
        assert!(!set.matches("LIB"));
    }

    #[test]
    fn test_display() {
        assert_eq!(IgnoreSet::default().to_string(), "inc,lib");
        assert_eq!(IgnoreSet::parse(" b ,a,,").to_string(), "a,b");
    }
}
