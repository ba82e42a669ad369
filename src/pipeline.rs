//! Avatar Pipeline - Single Entry Point
//!
//! name -> digest -> colors -> canvas -> encoded bytes. Nothing is cached and
//! nothing is shared between calls, so one pipeline serves any number of
//! concurrent callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::color::{extract_colors, Color};
use crate::encode::{CanvasEncoder, EncodingError, PngEncoder};
use crate::gradient::{render, RenderError};
use crate::hashing::{digest, digest_hex, sha256_hex};
use crate::{ALGORITHM_VERSION, AVATAR_SIZE, ENGINE_VERSION};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Reproduction record for one generated avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarManifest {
    pub algorithm_version: String,
    pub engine_version: String,
    /// The name as given when it is UTF-8, otherwise its bytes in hex.
    pub name: String,
    pub name_encoding: NameEncoding,
    pub digest: String,
    pub color1: String,
    pub color2: String,
    pub size: [u32; 2],
    pub format: String,
    pub png_sha256: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameEncoding {
    Utf8,
    Hex,
}

fn manifest_name(name: &[u8]) -> (String, NameEncoding) {
    match std::str::from_utf8(name) {
        Ok(s) => (s.to_string(), NameEncoding::Utf8),
        Err(_) => (hex::encode(name), NameEncoding::Hex),
    }
}

/// Encoded avatar together with its manifest.
#[derive(Debug, Clone)]
pub struct RenderedAvatar {
    pub manifest: AvatarManifest,
    pub bytes: Vec<u8>,
}

/// The avatar pipeline
pub struct AvatarPipeline {
    encoder: Box<dyn CanvasEncoder>,
}

impl AvatarPipeline {
    pub fn new() -> Self {
        Self::with_encoder(PngEncoder)
    }

    /// Swap in a different encoder (tests use this to inject failures).
    pub fn with_encoder(encoder: impl CanvasEncoder + 'static) -> Self {
        Self {
            encoder: Box::new(encoder),
        }
    }

    /// Generate the avatar bytes for `name`.
    ///
    /// Encoder failures come back unchanged; there is no input error.
    pub fn generate_avatar(&self, name: impl AsRef<[u8]>) -> Result<Vec<u8>, PipelineError> {
        self.render_stops(name.as_ref()).map(|(bytes, _, _)| bytes)
    }

    /// Generate the avatar and describe how it was made.
    pub fn compile(&self, name: impl AsRef<[u8]>) -> Result<RenderedAvatar, PipelineError> {
        let name = name.as_ref();
        let (bytes, color1, color2) = self.render_stops(name)?;
        let (manifest_name, name_encoding) = manifest_name(name);

        let manifest = AvatarManifest {
            algorithm_version: ALGORITHM_VERSION.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            name: manifest_name,
            name_encoding,
            digest: digest_hex(name),
            color1: color1.to_hex(),
            color2: color2.to_hex(),
            size: [AVATAR_SIZE, AVATAR_SIZE],
            format: self.encoder.name().to_string(),
            png_sha256: sha256_hex(&bytes),
        };

        Ok(RenderedAvatar { manifest, bytes })
    }

    /// Manifest only; the bytes are rendered and dropped.
    pub fn describe(&self, name: impl AsRef<[u8]>) -> Result<AvatarManifest, PipelineError> {
        Ok(self.compile(name)?.manifest)
    }

    fn render_stops(&self, name: &[u8]) -> Result<(Vec<u8>, Color, Color), PipelineError> {
        let digest = digest(name);
        let (color1, color2) = extract_colors(&digest);
        debug!(
            digest = %hex::encode(digest),
            color1 = %color1.to_hex(),
            color2 = %color2.to_hex(),
            "rendering avatar"
        );

        let canvas = render(color1, color2, AVATAR_SIZE)?;
        let bytes = self.encoder.encode(&canvas)?;
        Ok((bytes, color1, color2))
    }
}

impl Default for AvatarPipeline {
    fn default() -> Self {
        Self::new()
    }
}
