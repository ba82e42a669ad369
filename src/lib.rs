//! Identicon Core - Deterministic Gradient Avatars
//!
//! # The Four Laws (Non-Negotiable)
//! 1. Every Name Renders (the empty name included)
//! 2. Same Name, Same Bytes
//! 3. No Hidden State
//! 4. The Boundary Owns the Status Code

pub mod hashing;
pub mod color;
pub mod gradient;
pub mod encode;
pub mod pipeline;
pub mod config;
pub mod http;

pub use hashing::{digest, digest_hex, sha256_hex, Digest};
pub use color::{extract_colors, Color};
pub use gradient::{render, Canvas, RenderError};
pub use encode::{CanvasEncoder, EncodingError, PngEncoder, PNG_SIGNATURE};
pub use pipeline::{AvatarManifest, AvatarPipeline, NameEncoding, PipelineError, RenderedAvatar};
pub use config::{ConfigError, ServerConfig};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bumped whenever a change would alter the bytes produced for an existing name.
pub const ALGORITHM_VERSION: &str = "md5-diagonal-v1";

/// Side length of every generated avatar, in pixels.
pub const AVATAR_SIZE: u32 = 128;
