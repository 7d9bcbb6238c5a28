use anyhow::{Context, Result};
use std::path::PathBuf;
use triagem::config::Config;

pub fn run(path: PathBuf) -> Result<()> {
    let config = Config::default();
    let config_path = path.join("triagem.toml");

    let toml_content = format!(
        r#"# Triagem configuration

[paths]
# Directory of labeled training PDFs (<CODE>_<name>.pdf)
training_dir = "{}"
# File the trained model artifact is persisted to
model_path = "{}"
# Default PDF to classify or relabel when a request names none
intake_pdf = "{}"

[pipeline]
max_vocabulary = {}
smoothing = {}
test_fraction = {}
split_seed = {}

[http]
listen_addr = "{}"
cors_enabled = {}

[logging]
format = "text"
level = "info"
"#,
        config.paths.training_dir.display(),
        config.paths.model_path.display(),
        config.paths.intake_pdf.display(),
        config.pipeline.max_vocabulary,
        config.pipeline.smoothing,
        config.pipeline.test_fraction,
        config.pipeline.split_seed,
        config.http.listen_addr,
        config.http.cors_enabled,
    );

    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    std::fs::write(&config_path, toml_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Wrote {}", config_path.display());
    Ok(())
}
