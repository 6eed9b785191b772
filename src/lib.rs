//! Procedural generator for the travel app icon.
//!
//! The icon is drawn from fixed geometry (no source image) and written into
//! the layouts the iOS, Android and Expo builds expect.

use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

pub mod canvas;
pub mod composer;
pub mod export;
pub mod size_table;

use composer::{compose, Variant, DESIGN_GRID};

/// Which group of icons to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IconSet {
    /// Store and launcher icons
    All,
    /// Flat store icons resized from the 1024 master
    Store,
    /// Android mipmaps and Expo assets composed at each size
    Launcher,
}

/// Generate `set` under `root`, returning the number of files written
pub fn generate(set: IconSet, root: &Path) -> Result<usize> {
    let mut total = 0;

    if matches!(set, IconSet::All | IconSet::Store) {
        total += generate_store(root)?;
    }

    if matches!(set, IconSet::All | IconSet::Launcher) {
        total += generate_launcher(root)?;
    }

    Ok(total)
}

fn generate_store(root: &Path) -> Result<usize> {
    let table = size_table::store_icons()?;
    println!(
        "Generating store icons in {}...",
        root.join(table.dir()).display()
    );

    let base = compose(Variant::Full, DESIGN_GRID);
    export::export_resized(&base, &table, root)
}

fn generate_launcher(root: &Path) -> Result<usize> {
    let table = size_table::launcher_icons()?;
    println!("Generating launcher icons...");

    export::export_composed(|size| compose(Variant::Simple, size), &table, root)
}
