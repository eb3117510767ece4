use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeckitError {
    #[error("template {0} not found")]
    TemplateNotFound(String),

    #[error("please provide a feature description")]
    EmptyDescription,

    #[error("script {0} not found")]
    ScriptNotFound(String),

    #[error("Unable to create specification workspace.")]
    ProvisionFailed { stderr: String, stdout: String },

    #[error("Unable to run {0}; bash is not available.")]
    BashUnavailable(String),

    #[error("Feature creation script produced no JSON output.")]
    ProvisionEmptyOutput,

    #[error("Unexpected output from the feature creation script.")]
    ProvisionBadJson { stdout: String },

    #[error("Feature creation script did not return a spec file path.")]
    ProvisionMissingSpecFile,

    #[error("Feature creation script did not return a branch name.")]
    ProvisionMissingBranchName,

    #[error("backend returned an empty response")]
    EmptyGeneration,

    #[error(
        "Specification generation failed: assistant response did not start \
         with '# Feature Specification:'."
    )]
    MalformedGeneration { raw: String },

    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeckitError>;
