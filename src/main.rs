//! sass2css - SASS FOLDER TO CSS CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sass2css::{cli::Args, config::Config, driver::Driver};

fn main() -> Result<()> {
    let args = Args::parse();

    // 로깅 설정
    setup_logging(args.verbose);

    // 입력/출력 경로 확정
    let config = Config::from_args(&args).context("설정 확인 실패")?;

    // 스레드 풀 설정
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("스레드 풀 초기화 실패")?;
    }

    // 헤더 출력
    print_header(&config);

    Driver::new(config).run().context("변환 실패")?;

    Ok(())
}

/// 로그 필터 설정 (stderr 출력)
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sass2css=debug,warn")
    } else {
        EnvFilter::new("sass2css=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

/// 헤더 출력
fn print_header(config: &Config) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🎨 SASS FOLDER TO CSS CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 폴더: {}",
        "📂".bright_cyan(),
        config.input_dir.display()
    );
    println!(
        "  {} 출력 폴더: {}",
        "📄".bright_green(),
        config.output_dir.display()
    );

    if config.ignore.is_empty() {
        println!("  {} 무시 폴더: (없음)", "🚫".bright_magenta());
    } else {
        println!("  {} 무시 폴더: {}", "🚫".bright_magenta(), config.ignore);
    }

    if config.watch && !config.dry_run {
        println!(
            "  {} 반복 간격: {}ms",
            "🔁".bright_yellow(),
            config.interval.as_millis()
        );
    }

    if config.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 컴파일 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}
