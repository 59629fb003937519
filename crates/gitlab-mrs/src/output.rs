use crate::config::ConfigError;
use std::fmt::Write;

pub const ERROR_HEADER: &str = "Gitlab MRs Error | color=red";

/// Error report shown instead of the menu.
///
/// Configuration problems point the user at the file to edit; anything else
/// shows the error chain on one line.
pub fn render_error(err: &anyhow::Error) -> String {
    let detail = match err
        .downcast_ref::<ConfigError>()
        .and_then(ConfigError::unconfigured_path)
    {
        Some(path) => format!("Please update the config in {}", path.display()),
        None => format!("{:#}", err).replace(['\r', '\n'], " "),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", ERROR_HEADER);
    let _ = writeln!(out, "{}|color=red", detail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_core::MrError;
    use std::path::PathBuf;

    #[test]
    fn test_unconfigured_error_names_config_path() {
        let err = anyhow::Error::from(ConfigError::Missing {
            path: PathBuf::from("/home/dev/.gitlab_mrs"),
        });

        assert_eq!(
            render_error(&err),
            "Gitlab MRs Error | color=red\nPlease update the config in /home/dev/.gitlab_mrs|color=red\n"
        );
    }

    #[test]
    fn test_remote_error_is_single_detail_line() {
        let err = anyhow::Error::from(MrError::Api {
            status: 502,
            message: "Bad gateway\nupstream down".to_string(),
        });

        let report = render_error(&err);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ERROR_HEADER);
        assert_eq!(
            lines[1],
            "API error (502): Bad gateway upstream down|color=red"
        );
    }

    #[test]
    fn test_invalid_config_shows_cause() {
        let err = anyhow::Error::from(ConfigError::Invalid {
            path: PathBuf::from("/tmp/cfg"),
            message: "expected value".to_string(),
        });

        let report = render_error(&err);

        assert!(report.contains("Failed to load config from /tmp/cfg: expected value|color=red"));
    }
}
