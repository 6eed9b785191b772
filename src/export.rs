use crate::size_table::SizeTable;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Resize a shared master to every entry of `table` and write the results
///
/// Entries matching the master's edge length are written from the master
/// itself, so the native-resolution output is pixel-identical to it. Tables
/// asking for anything larger than the master are rejected before any file
/// is written.
pub fn export_resized(base: &RgbImage, table: &SizeTable, root: &Path) -> Result<usize> {
    if table.max_size() > base.width() {
        anyhow::bail!(
            "Icon size {} exceeds the {}x{} master",
            table.max_size(),
            base.width(),
            base.height()
        );
    }

    let mut written = 0;

    for (path, size) in table.destinations(root) {
        ensure_parent(&path)?;

        if base.dimensions() == (size, size) {
            save_png(base, &path)?;
        } else {
            let resized = imageops::resize(base, size, size, FilterType::Lanczos3);
            save_png(&resized, &path)?;
        }

        println!("  ✓ Generated {} ({size}x{size})", path.display());
        written += 1;
    }

    Ok(written)
}

/// Compose a fresh canvas at each entry's exact size and write it
pub fn export_composed<F>(compose: F, table: &SizeTable, root: &Path) -> Result<usize>
where
    F: Fn(u32) -> RgbImage,
{
    let mut written = 0;

    for (path, size) in table.destinations(root) {
        ensure_parent(&path)?;

        let canvas = compose(size);
        save_png(&canvas, &path)?;

        println!("  ✓ Generated {} ({size}x{size})", path.display());
        written += 1;
    }

    Ok(written)
}

/// Create the parent directory of `path`, succeeding if it already exists
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }
    Ok(())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_png(image, &mut out).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

// Encode with fixed settings so reruns produce identical bytes
fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}
