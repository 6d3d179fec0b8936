mod interaction_profiles;
mod reflection;

use anyhow::{bail, Context};
use std::{
    fs,
    path::{Path, PathBuf},
};
use xrx_registry::Registry;

pub fn workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .into()
}

pub fn default_registry_path() -> PathBuf {
    workspace_dir().join("registry/xr.xml")
}

fn reflection_path() -> PathBuf {
    workspace_dir().join("xrx/extensions/src/reflect/generated.rs")
}

fn interaction_profiles_path() -> PathBuf {
    workspace_dir().join("xrx/interaction/src/generated.rs")
}

fn load_registry(path: &Path) -> anyhow::Result<Registry> {
    let (registry, errors) = xrx_registry::parse_file(path)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    for error in &errors {
        log::warn!("registry: {error}");
    }

    let problems = registry.validate();
    if !problems.is_empty() {
        for problem in &problems {
            log::error!("registry: {problem}");
        }
        bail!("Registry {} failed validation", path.display());
    }

    Ok(registry)
}

fn write_generated(path: &Path, rendered: String) -> anyhow::Result<()> {
    fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());

    Ok(())
}

pub fn gen_reflection(registry_path: &Path) -> anyhow::Result<()> {
    let registry = load_registry(registry_path)?;

    write_generated(&reflection_path(), reflection::render(&registry)?)
}

pub fn gen_interaction_profiles(registry_path: &Path) -> anyhow::Result<()> {
    let registry = load_registry(registry_path)?;

    write_generated(
        &interaction_profiles_path(),
        interaction_profiles::render(&registry)?,
    )
}

pub fn gen_all(registry_path: &Path) -> anyhow::Result<()> {
    let registry = load_registry(registry_path)?;

    write_generated(&reflection_path(), reflection::render(&registry)?)?;
    write_generated(
        &interaction_profiles_path(),
        interaction_profiles::render(&registry)?,
    )
}

pub fn check_gen(registry_path: &Path) -> anyhow::Result<()> {
    let registry = load_registry(registry_path)?;

    let mut stale = Vec::new();
    for (path, rendered) in [
        (reflection_path(), reflection::render(&registry)?),
        (
            interaction_profiles_path(),
            interaction_profiles::render(&registry)?,
        ),
    ] {
        let current = fs::read_to_string(&path).unwrap_or_default();
        if current != rendered {
            stale.push(path);
        }
    }

    if !stale.is_empty() {
        for path in &stale {
            log::error!("Stale generated file: {}", path.display());
        }
        bail!("Run `cargo xtask gen-all` and commit the result");
    }

    log::info!("Generated files are up to date");

    Ok(())
}
