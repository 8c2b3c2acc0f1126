use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("could not execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not execute '{command}': {status}{}", fmt_stderr(.stderr))]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("'{command}' produced non UTF-8 output")]
    Utf8 { command: String },
}

fn fmt_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({})", trimmed)
    }
}

impl InspectError {
    /// 失败的完整命令行
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. } | Self::Failed { command, .. } | Self::Utf8 { command } => {
                command
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;

/// 执行外部工具并返回其 stdout
///
/// 调用是阻塞式的整体操作: 非零退出码直接视为失败, 不做重试。
pub async fn run_tool(program: &str, args: &[&str]) -> Result<String> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!("Running: {}", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| InspectError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(InspectError::Failed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| InspectError::Utf8 {
        command: command.clone(),
    })?;
    tracing::debug!("'{}' returned {} bytes", command, stdout.len());
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_tool_missing_program() {
        let err = run_tool("slibdep-no-such-tool", &["-t", "x.a"]).await.unwrap_err();
        assert!(matches!(err, InspectError::Spawn { .. }));
        assert_eq!(err.command(), "slibdep-no-such-tool -t x.a");
        assert!(err.to_string().starts_with("could not execute 'slibdep-no-such-tool -t x.a'"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_tool_captures_stdout() {
        let out = run_tool("echo", &["a.o"]).await.unwrap();
        assert_eq!(out, "a.o\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_tool_non_zero_exit() {
        let err = run_tool("false", &[]).await.unwrap_err();
        assert!(matches!(err, InspectError::Failed { .. }));
        assert_eq!(err.command(), "false");
    }

    #[test]
    fn test_fmt_stderr() {
        assert_eq!(fmt_stderr("  \n"), "");
        assert_eq!(fmt_stderr("ar: x.a: No such file\n"), " (ar: x.a: No such file)");
    }
}
