use crate::common::*;

#[doc = r#"
    전역 로거를 초기화하는 함수.

    - 기본 레벨은 `info` 이며 `RUST_LOG` 환경변수로 덮어쓸 수 있다
    - `logs/` 디렉토리에 `voltage_chart_server` 이름으로 파일 로그를 남기고 stderr 로도 복제한다
    - 하루 단위로 로테이션하고 최근 10개 파일만 유지한다

    반환되는 `LoggerHandle` 은 프로세스가 종료될 때까지 살아있어야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] Invalid log specification: {:?}", e))
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("voltage_chart_server"),
        )
        .duplicate_to_stderr(Duplicate::Info)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .format_for_stderr(custom_format)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}

#[doc = "[시각] [레벨] [파일:라인] 메시지 형태의 로그 포맷"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}
