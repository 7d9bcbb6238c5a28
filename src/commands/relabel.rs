use anyhow::Result;
use std::path::PathBuf;
use triagem::config::Config;
use triagem::service::TriageService;
use triagem::types::Specialty;

pub fn run(config: Config, pdf: PathBuf, specialty: &str) -> Result<()> {
    let specialty: Specialty = specialty.parse()?;
    let service = TriageService::new(config);
    let destination = service.relabel(Some(&pdf), specialty)?;

    println!("Copied to {}", destination.display());
    Ok(())
}
