//! Output size tables
//!
//! A table is an ordered list of `(target, size)` entries resolved against a
//! directory under the output root. The built-in tables are embedded as JSON
//! so the layouts read the same way the platform docs list them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

const STORE_ICONS_JSON: &str = r#"
{
  "dir": "assets/icons",
  "entries": [
    { "target": "ios_icon_20x20", "size": 20 },
    { "target": "ios_icon_29x29", "size": 29 },
    { "target": "ios_icon_40x40", "size": 40 },
    { "target": "ios_icon_60x60", "size": 60 },
    { "target": "ios_icon_76x76", "size": 76 },
    { "target": "ios_icon_83.5x83.5", "size": 84 },
    { "target": "ios_icon_1024x1024", "size": 1024 },
    { "target": "android_icon_36x36", "size": 36 },
    { "target": "android_icon_48x48", "size": 48 },
    { "target": "android_icon_72x72", "size": 72 },
    { "target": "android_icon_96x96", "size": 96 },
    { "target": "android_icon_144x144", "size": 144 },
    { "target": "android_icon_192x192", "size": 192 },
    { "target": "android_icon_512x512", "size": 512 }
  ]
}
"#;

const LAUNCHER_ICONS_JSON: &str = r#"
{
  "dir": ".",
  "entries": [
    { "target": "android/app/src/main/res/mipmap-hdpi/ic_launcher.png", "size": 72 },
    { "target": "android/app/src/main/res/mipmap-hdpi/ic_launcher_round.png", "size": 72 },
    { "target": "android/app/src/main/res/mipmap-mdpi/ic_launcher.png", "size": 48 },
    { "target": "android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png", "size": 48 },
    { "target": "android/app/src/main/res/mipmap-xhdpi/ic_launcher.png", "size": 96 },
    { "target": "android/app/src/main/res/mipmap-xhdpi/ic_launcher_round.png", "size": 96 },
    { "target": "android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png", "size": 144 },
    { "target": "android/app/src/main/res/mipmap-xxhdpi/ic_launcher_round.png", "size": 144 },
    { "target": "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png", "size": 192 },
    { "target": "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png", "size": 192 },
    { "target": "assets/icon.png", "size": 512 },
    { "target": "assets/icon1024.png", "size": 1024 }
  ]
}
"#;

/// A single output: a logical name or relative `.png` path, and its edge length
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SizeEntry {
    pub target: String,
    pub size: u32,
}

impl SizeEntry {
    /// Resolve the destination file inside `dir`
    ///
    /// Targets that already name a `.png` file are joined as-is; logical
    /// names get the extension appended (`ios_icon_83.5x83.5` becomes
    /// `ios_icon_83.5x83.5.png`, not a replaced extension).
    pub fn destination(&self, dir: &Path) -> PathBuf {
        if self.target.ends_with(".png") {
            dir.join(&self.target)
        } else {
            dir.join(format!("{}.png", self.target))
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTable {
    dir: PathBuf,
    entries: Vec<SizeEntry>,
}

/// Ordered, validated set of outputs sharing one base directory
#[derive(Debug, Clone)]
pub struct SizeTable {
    dir: PathBuf,
    entries: Vec<SizeEntry>,
}

impl SizeTable {
    /// Build a table, rejecting duplicate targets and zero sizes
    pub fn new(dir: impl Into<PathBuf>, entries: Vec<SizeEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.size == 0 {
                anyhow::bail!("Icon size for {} must be at least 1", entry.target);
            }
            if !seen.insert(entry.target.as_str()) {
                anyhow::bail!("Duplicate icon target: {}", entry.target);
            }
        }

        Ok(Self {
            dir: dir.into(),
            entries,
        })
    }

    /// Parse a table from its JSON description, keeping document order
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json).context("Invalid size table JSON")?;
        Self::new(raw.dir, raw.entries)
    }

    /// Directory the entries are resolved against, relative to the output root
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[SizeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest edge length in the table, 0 when empty
    pub fn max_size(&self) -> u32 {
        self.entries.iter().map(|e| e.size).max().unwrap_or(0)
    }

    /// Destination paths paired with their sizes, in table order
    pub fn destinations<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = (PathBuf, u32)> + 'a {
        let dir = if self.dir == Path::new(".") {
            root.to_path_buf()
        } else {
            root.join(&self.dir)
        };
        self.entries
            .iter()
            .map(move |entry| (entry.destination(&dir), entry.size))
    }
}

/// iOS and Android store icons, resized from the 1024 master
pub fn store_icons() -> Result<SizeTable> {
    SizeTable::from_json(STORE_ICONS_JSON).context("Built-in store icon table is invalid")
}

/// Android launcher mipmaps and Expo assets, composed at each size
pub fn launcher_icons() -> Result<SizeTable> {
    SizeTable::from_json(LAUNCHER_ICONS_JSON).context("Built-in launcher icon table is invalid")
}
