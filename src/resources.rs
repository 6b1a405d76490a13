//! Path-keyed resource cache
//!
//! Textures, sounds and fonts are requested by file path and handed out as
//! small `Copy` handles indexing into arenas owned by the `ResourceManager`.
//! Requesting the same path twice returns the same handle. What exists (and
//! how big each texture is) comes from an `AssetManifest`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asset paths used by the game
pub mod paths {
    pub const BUNNY_TEXTURE: &str = "res/Images/bunny.png";
    pub const CARROT_MISSILE_TEXTURE: &str = "res/Images/carrot.png";
    pub const ALIEN_MISSILE_TEXTURE: &str = "res/Images/alienMissile1.png";
    pub const EXPLOSION_TEXTURE: &str = "res/Images/explosion1.png";
    pub const ALIEN_TEXTURES: [&str; 2] = ["res/Images/alien1.png", "res/Images/alien2.png"];
    pub const EGG_TEXTURES: [&str; 5] = [
        "res/Images/Egg04.png",
        "res/Images/Egg05.png",
        "res/Images/Egg06.png",
        "res/Images/Egg07.png",
        "res/Images/Egg08.png",
    ];
    pub const MISSILE_SOUND: &str = "res/Sounds/MissileLaunch.wav";
    pub const EXPLOSION_SOUND: &str = "res/Sounds/Explosion.wav";
    pub const FONT: &str = "res/Fonts/Minecraftia.ttf";
}

/// Handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

/// Handle to a loaded sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(u32);

/// Handle to a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(u32);

/// Kind of resource, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Texture,
    Sound,
    Font,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Texture => write!(f, "texture"),
            ResourceKind::Sound => write!(f, "sound"),
            ResourceKind::Font => write!(f, "font"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{kind} not found: {path}")]
    NotFound { kind: ResourceKind, path: String },
    #[error("failed to read asset manifest {path}: {source}")]
    ManifestIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid asset manifest {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Pixel dimensions of a texture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    pub width: f32,
    pub height: f32,
}

impl TextureInfo {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Declares every asset that can be loaded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: BTreeMap<String, TextureInfo>,
    #[serde(default)]
    pub sounds: BTreeSet<String>,
    #[serde(default)]
    pub fonts: BTreeSet<String>,
}

impl AssetManifest {
    /// The assets shipped with the game
    pub fn builtin() -> Self {
        let mut textures = BTreeMap::new();
        textures.insert(paths::BUNNY_TEXTURE.to_string(), TextureInfo::new(32.0, 32.0));
        textures.insert(paths::CARROT_MISSILE_TEXTURE.to_string(), TextureInfo::new(8.0, 16.0));
        textures.insert(paths::ALIEN_MISSILE_TEXTURE.to_string(), TextureInfo::new(8.0, 16.0));
        textures.insert(paths::EXPLOSION_TEXTURE.to_string(), TextureInfo::new(32.0, 32.0));
        for path in paths::ALIEN_TEXTURES {
            textures.insert(path.to_string(), TextureInfo::new(32.0, 32.0));
        }
        for path in paths::EGG_TEXTURES {
            textures.insert(path.to_string(), TextureInfo::new(24.0, 32.0));
        }

        let sounds = [paths::MISSILE_SOUND, paths::EXPLOSION_SOUND]
            .into_iter()
            .map(String::from)
            .collect();
        let fonts = [paths::FONT].into_iter().map(String::from).collect();

        Self {
            textures,
            sounds,
            fonts,
        }
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| ResourceError::ManifestIo {
            path: display.clone(),
            source,
        })?;
        let manifest = serde_json::from_str(&json)
            .map_err(|source| ResourceError::ManifestParse { path: display, source })?;
        Ok(manifest)
    }
}

/// A texture handle paired with its size, ready to build sprites from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAsset {
    pub texture: TextureHandle,
    pub size: Vec2,
}

#[derive(Debug)]
struct LoadedTexture {
    path: String,
    size: Vec2,
}

/// Owns every loaded resource; hands out handles by path
#[derive(Debug)]
pub struct ResourceManager {
    manifest: AssetManifest,
    textures: Vec<LoadedTexture>,
    texture_ids: HashMap<String, TextureHandle>,
    sounds: Vec<String>,
    sound_ids: HashMap<String, SoundHandle>,
    fonts: Vec<String>,
    font_ids: HashMap<String, FontHandle>,
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new(AssetManifest::builtin())
    }
}

impl ResourceManager {
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            manifest,
            textures: Vec::new(),
            texture_ids: HashMap::new(),
            sounds: Vec::new(),
            sound_ids: HashMap::new(),
            fonts: Vec::new(),
            font_ids: HashMap::new(),
        }
    }

    pub fn texture(&mut self, path: &str) -> Result<TextureHandle, ResourceError> {
        if let Some(&handle) = self.texture_ids.get(path) {
            return Ok(handle);
        }

        let info = self
            .manifest
            .textures
            .get(path)
            .copied()
            .ok_or_else(|| ResourceError::NotFound {
                kind: ResourceKind::Texture,
                path: path.to_string(),
            })?;

        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(LoadedTexture {
            path: path.to_string(),
            size: Vec2::new(info.width, info.height),
        });
        self.texture_ids.insert(path.to_string(), handle);
        log::debug!("Loaded texture {} as {:?}", path, handle);
        Ok(handle)
    }

    /// Load a texture and pair it with its size
    pub fn sprite(&mut self, path: &str) -> Result<SpriteAsset, ResourceError> {
        let texture = self.texture(path)?;
        Ok(SpriteAsset {
            texture,
            size: self.texture_size(texture),
        })
    }

    pub fn sound(&mut self, path: &str) -> Result<SoundHandle, ResourceError> {
        if let Some(&handle) = self.sound_ids.get(path) {
            return Ok(handle);
        }
        if !self.manifest.sounds.contains(path) {
            return Err(ResourceError::NotFound {
                kind: ResourceKind::Sound,
                path: path.to_string(),
            });
        }

        let handle = SoundHandle(self.sounds.len() as u32);
        self.sounds.push(path.to_string());
        self.sound_ids.insert(path.to_string(), handle);
        Ok(handle)
    }

    pub fn font(&mut self, path: &str) -> Result<FontHandle, ResourceError> {
        if let Some(&handle) = self.font_ids.get(path) {
            return Ok(handle);
        }
        if !self.manifest.fonts.contains(path) {
            return Err(ResourceError::NotFound {
                kind: ResourceKind::Font,
                path: path.to_string(),
            });
        }

        let handle = FontHandle(self.fonts.len() as u32);
        self.fonts.push(path.to_string());
        self.font_ids.insert(path.to_string(), handle);
        Ok(handle)
    }

    /// Size of a loaded texture in pixels
    pub fn texture_size(&self, handle: TextureHandle) -> Vec2 {
        self.textures
            .get(handle.0 as usize)
            .map(|t| t.size)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn texture_path(&self, handle: TextureHandle) -> Option<&str> {
        self.textures.get(handle.0 as usize).map(|t| t.path.as_str())
    }

    pub fn sound_path(&self, handle: SoundHandle) -> Option<&str> {
        self.sounds.get(handle.0 as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_same_handle() {
        let mut resources = ResourceManager::default();
        let a = resources.texture(paths::BUNNY_TEXTURE).unwrap();
        let b = resources.texture(paths::BUNNY_TEXTURE).unwrap();
        assert_eq!(a, b);

        let other = resources.texture(paths::CARROT_MISSILE_TEXTURE).unwrap();
        assert_ne!(a, other);
        assert_eq!(resources.texture_path(other), Some(paths::CARROT_MISSILE_TEXTURE));
    }

    #[test]
    fn test_missing_texture_is_not_found() {
        let mut resources = ResourceManager::default();
        let err = resources.texture("res/Images/missing.png").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::NotFound {
                kind: ResourceKind::Texture,
                ..
            }
        ));
        assert_eq!(err.to_string(), "texture not found: res/Images/missing.png");
    }

    #[test]
    fn test_missing_sound_and_font() {
        let mut resources = ResourceManager::new(AssetManifest::default());
        assert!(resources.sound(paths::MISSILE_SOUND).is_err());
        assert!(resources.font(paths::FONT).is_err());
    }

    #[test]
    fn test_sprite_carries_manifest_size() {
        let mut resources = ResourceManager::default();
        let sprite = resources.sprite(paths::EGG_TEXTURES[0]).unwrap();
        assert_eq!(sprite.size, Vec2::new(24.0, 32.0));
    }

    #[test]
    fn test_manifest_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(
            &path,
            r#"{"textures": {"a.png": {"width": 4.0, "height": 2.0}}, "sounds": ["s.wav"]}"#,
        )
        .unwrap();

        let manifest = AssetManifest::load(&path).unwrap();
        let mut resources = ResourceManager::new(manifest);
        let handle = resources.texture("a.png").unwrap();
        assert_eq!(resources.texture_size(handle), Vec2::new(4.0, 2.0));
        assert!(resources.sound("s.wav").is_ok());
        assert!(resources.font("f.ttf").is_err());
    }

    #[test]
    fn test_manifest_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AssetManifest::load(&path),
            Err(ResourceError::ManifestParse { .. })
        ));
    }
}
