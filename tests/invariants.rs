//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use std::collections::HashSet;
use std::thread;

use identicon_core::{digest, extract_colors, AvatarPipeline, Color, AVATAR_SIZE, PNG_SIGNATURE};

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[test]
fn invariant_same_name_same_bytes() {
    let pipeline = AvatarPipeline::new();
    let long = "x".repeat(4096);
    for name in ["alice", "bob", "", "Ünïcødé 🙂", long.as_str()] {
        let a = pipeline.generate_avatar(name).unwrap();
        let b = pipeline.generate_avatar(name).unwrap();
        assert_eq!(a, b, "output differs for {name:?}");
    }
}

#[test]
fn invariant_fresh_pipelines_agree() {
    let a = AvatarPipeline::new().generate_avatar("carol").unwrap();
    let b = AvatarPipeline::default().generate_avatar("carol").unwrap();
    assert_eq!(a, b);
}

#[test]
fn invariant_output_is_png_of_fixed_size() {
    let pipeline = AvatarPipeline::new();
    let bytes = pipeline.generate_avatar("dave").unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (AVATAR_SIZE, AVATAR_SIZE));
    assert!(img.pixels().all(|p| p[3] == 255));
}

#[test]
fn invariant_corners_match_stops() {
    let pipeline = AvatarPipeline::new();
    for name in ["erin", "frank", "grace", ""] {
        let (c1, c2) = extract_colors(&digest(name));
        let img = decode(&pipeline.generate_avatar(name).unwrap());
        assert_eq!(Color::from(*img.get_pixel(0, 0)), c1);
        assert_eq!(Color::from(*img.get_pixel(AVATAR_SIZE - 1, AVATAR_SIZE - 1)), c2);
    }
}

#[test]
fn invariant_empty_name_renders() {
    let bytes = AvatarPipeline::new().generate_avatar("").unwrap();
    let img = decode(&bytes);
    // MD5("") = d41d8cd98f00b204e9800998ecf8427e
    assert_eq!(Color::from(*img.get_pixel(0, 0)), Color::opaque(0xd4, 0x1d, 0x8c));
    assert_eq!(Color::from(*img.get_pixel(127, 127)), Color::opaque(0xb2, 0x04, 0xe9));
}

#[test]
fn invariant_alice_golden() {
    // MD5("alice") = 6384e2b2184bcbf58eccf10ca7a6563c
    let img = decode(&AvatarPipeline::new().generate_avatar("alice").unwrap());
    assert_eq!(Color::from(*img.get_pixel(0, 0)), Color::opaque(99, 132, 226));
    assert_eq!(Color::from(*img.get_pixel(127, 127)), Color::opaque(203, 245, 142));
}

#[test]
fn invariant_distinct_names_distinct_colors() {
    let names: Vec<String> = (0..200).map(|i| format!("user-{i}")).collect();
    let firsts: HashSet<Color> = names
        .iter()
        .map(|n| extract_colors(&digest(n)).0)
        .collect();
    assert_eq!(firsts.len(), names.len());

    // Similar names still move both stops.
    let (a1, a2) = extract_colors(&digest("alice"));
    let (b1, b2) = extract_colors(&digest("alicf"));
    assert_ne!(a1, b1);
    assert_ne!(a2, b2);
}

#[test]
fn invariant_concurrent_calls_independent() {
    let pipeline = AvatarPipeline::new();
    let expected = pipeline.generate_avatar("shared").unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pipeline = &pipeline;
                s.spawn(move || {
                    let own = pipeline.generate_avatar(format!("worker-{i}")).unwrap();
                    let shared = pipeline.generate_avatar("shared").unwrap();
                    (own, shared)
                })
            })
            .collect();
        for h in handles {
            let (own, shared) = h.join().unwrap();
            assert_eq!(&own[..8], &PNG_SIGNATURE);
            assert_eq!(shared, expected);
        }
    });
}
