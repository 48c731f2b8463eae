use super::info_log::InfoLog;
use super::source::ShaderStage;

/// Shader compile or link failure.
///
/// These are diagnostics, not startup failures: the caller logs them and keeps
/// running without a program.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShaderError {
    #[error("{stage} shader `{label}` failed to compile:\n{log}")]
    Compile {
        stage: ShaderStage,
        label: &'static str,
        log: InfoLog,
    },

    #[error("program `{label}` failed to link:\n{log}")]
    Link { label: String, log: InfoLog },
}

impl ShaderError {
    pub(crate) fn compile(stage: ShaderStage, label: &'static str, log: impl Into<String>) -> Self {
        ShaderError::Compile {
            stage,
            label,
            log: InfoLog::new(log),
        }
    }

    pub(crate) fn link(label: impl Into<String>, log: impl Into<String>) -> Self {
        ShaderError::Link {
            label: label.into(),
            log: InfoLog::new(log),
        }
    }

    pub fn log(&self) -> &InfoLog {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log, .. } => log,
        }
    }
}
