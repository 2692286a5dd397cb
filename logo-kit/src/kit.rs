use crate::error::{KitError, Result};
use crate::package::package_dir;
use crate::raster::{save_png, MIN_SIZE};
use crate::readme::readme_text;
use indicatif::ProgressBar;
use itertools::Itertools;
use logo_vector::{favicon_style, save_icon, save_lockup, IconStyle};
use std::fs;
use std::path::PathBuf;

pub const ICON_SVG: &str = "borrowpower-icon.svg";
pub const LOGO_SVG: &str = "borrowpower-logo-horizontal.svg";
pub const FAVICON_SVG: &str = "favicon.svg";
pub const README: &str = "README.txt";

pub const ICON_SIZE: u32 = 256;
pub const LOCKUP_HEIGHT: u32 = 512;
pub const PNG_SIZES: [u32; 8] = [32, 48, 64, 128, 180, 192, 256, 512];

pub fn png_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

#[derive(Debug, Clone)]
pub struct KitConfig {
    pub out_dir: PathBuf,
    /// Written after everything else. Usually a sibling of `out_dir`.
    pub archive: PathBuf,
    pub png_sizes: Vec<u32>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("borrowpower_logo"),
            archive: PathBuf::from("borrowpower-logo-kit.zip"),
            png_sizes: PNG_SIZES.to_vec(),
        }
    }
}

impl KitConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.png_sizes.iter().find(|&&s| s < MIN_SIZE) {
            return Err(KitError::Config(format!(
                "raster size {} is below the minimum of {}",
                size, MIN_SIZE
            )));
        }
        if let Some(size) = self.png_sizes.iter().duplicates().next() {
            return Err(KitError::Config(format!("raster size {} is listed twice", size)));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct KitReport {
    /// Files written into the output directory, in write order.
    pub files: Vec<PathBuf>,
    pub archive: PathBuf,
    /// Archive entry names, sorted.
    pub entries: Vec<String>,
}

pub fn generate(config: &KitConfig) -> Result<KitReport> {
    generate_with_progress(config, &ProgressBar::hidden())
}

/// Runs the whole kit: vector files, PNGs, README, then the archive.
///
/// `progress` is advanced once per PNG size. The first failure aborts the run and files
/// written before it stay on disk.
pub fn generate_with_progress(config: &KitConfig, progress: &ProgressBar) -> Result<KitReport> {
    config.validate()?;
    let dir = config.out_dir.as_path();
    fs::create_dir_all(dir).map_err(KitError::io(dir))?;

    let mut files = Vec::new();

    let path = dir.join(ICON_SVG);
    save_icon(&path, &IconStyle::sized(ICON_SIZE)).map_err(KitError::io(&path))?;
    files.push(path);

    let path = dir.join(LOGO_SVG);
    save_lockup(&path, LOCKUP_HEIGHT).map_err(KitError::io(&path))?;
    files.push(path);

    let path = dir.join(FAVICON_SVG);
    save_icon(&path, &favicon_style()).map_err(KitError::io(&path))?;
    files.push(path);
    log::info!("wrote vector files to {}", dir.display());

    for &size in config.png_sizes.iter() {
        let name = png_name(size);
        progress.set_message(name.clone());
        let path = dir.join(&name);
        save_png(&path, size)?;
        files.push(path);
        progress.inc(1);
    }
    log::info!("wrote {} raster icons", config.png_sizes.len());

    let path = dir.join(README);
    fs::write(&path, readme_text(&config.png_sizes)).map_err(KitError::io(&path))?;
    files.push(path);

    let entries = package_dir(dir, &config.archive)?;
    log::info!(
        "packed {} files into {}",
        entries.len(),
        config.archive.display()
    );

    Ok(KitReport {
        files,
        archive: config.archive.clone(),
        entries,
    })
}
