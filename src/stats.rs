//! 통계 및 출력 모듈
//!
//! 패스별 진행 카운터와 콘솔 출력을 담당합니다.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::paths::Conversion;

/// 한 패스의 진행 통계
///
/// `dispatched - finished`가 현재 실행 중인 변환 수입니다.
pub struct PassStats {
    /// 디스패치된 변환 수
    pub dispatched: AtomicUsize,
    /// 끝난 변환 수 (성공/실패 무관)
    pub finished: AtomicUsize,
    start_time: Instant,
    bar: ProgressBar,
}

impl PassStats {
    /// 새 패스 통계 생성
    ///
    /// `show_progress`가 false이면 진행률 표시를 숨깁니다.
    pub fn new(show_progress: bool) -> Self {
        let bar = if show_progress {
            create_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        Self {
            dispatched: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            start_time: Instant::now(),
            bar,
        }
    }

    /// 변환 디스패치 기록 및 진행 줄 출력
    pub fn record_dispatch(&self, conversion: &Conversion) {
        self.dispatched.fetch_add(1, Ordering::SeqCst);
        self.bar.inc_length(1);
        let line = conversion.progress_line();
        self.bar.suspend(|| println!("{}", line));
    }

    /// 변환 종료 기록
    pub fn record_finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
    }

    pub fn get_dispatched(&self) -> usize {
        self.dispatched.load(Ordering::SeqCst)
    }

    pub fn get_finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// 실행 중인 변환 수
    pub fn in_flight(&self) -> usize {
        self.get_dispatched().saturating_sub(self.get_finished())
    }

    /// 진행률 표시 정리 후 결과 반환
    pub fn finish(self) -> PassReport {
        self.bar.finish_and_clear();
        PassReport {
            dispatched: self.get_dispatched(),
            elapsed: self.start_time.elapsed(),
        }
    }
}

/// 끝난 패스의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub dispatched: usize,
    pub elapsed: Duration,
}

impl PassReport {
    /// 패스 요약 출력
    pub fn print_summary(&self) {
        println!(
            "  {} 변환 파일 수: {}",
            "📋".bright_white(),
            self.dispatched.to_string().bright_green()
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed)
        );
    }
}

/// 패스 완료 배너 출력
pub fn print_banner() {
    println!("{}", "================".bright_blue());
    println!("{}", "      Done      ".bright_white().bold());
    println!("{}", "================".bright_blue());
}

/// 진행률 바 생성
fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos}/{len} 변환 완료 {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn conversion() -> Conversion {
        Conversion {
            input: PathBuf::from("/w/sass/a.sass"),
            output: PathBuf::from("/w/css/a.css"),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000초");
        assert_eq!(format_duration(Duration::from_secs(65)), "1분 5초");
        assert_eq!(format_duration(Duration::from_secs(3665)), "1시간 1분");
    }

    #[test]
    fn test_pass_counters() {
        let stats = PassStats::new(false);

        stats.record_dispatch(&conversion());
        stats.record_dispatch(&conversion());
        assert_eq!(stats.in_flight(), 2);

        stats.record_finish();
        assert_eq!(stats.get_dispatched(), 2);
        assert_eq!(stats.get_finished(), 1);
        assert_eq!(stats.in_flight(), 1);

        stats.record_finish();
        assert_eq!(stats.in_flight(), 0);

        let report = stats.finish();
        assert_eq!(report.dispatched, 2);
    }
}
