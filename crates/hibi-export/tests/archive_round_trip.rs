//! Integration test: build an archive, read it back with the zip
//! reader, and verify entry order, manifest text, and image pixels.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{Cursor, Read};

use hibi_export::{ArchiveManifest, archive_filename, build_archive};
use hibi_pipeline::{PipelineParams, RgbImage};
use time::macros::datetime;

fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, index: usize) -> (String, Vec<u8>) {
    let mut entry = archive.by_index(index).unwrap();
    let name = entry.name().to_owned();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    (name, bytes)
}

#[test]
fn archive_round_trip_preserves_manifest_and_images() {
    let params = PipelineParams {
        blur: 4,
        canny_min: 50,
        canny_max: 150,
        kernel: 4,
    };
    let wall = RgbImage::from_pixel(8, 6, image::Rgb([255, 255, 255]));
    let bridge = RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0]));
    let images = vec![
        ("wall.png".to_owned(), wall.clone()),
        ("bridge.jpg".to_owned(), bridge),
    ];
    let manifest = ArchiveManifest::new(
        params,
        vec!["wall.png".to_owned(), "bridge.jpg".to_owned()],
    );
    let ts = datetime!(2026-08-30 10:20:30 UTC);

    let bytes = build_archive(&images, &manifest, ts).expect("archive build should succeed");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 3);

    // Entry 0: the manifest, named with the timestamp.
    let (name, body) = read_entry(&mut archive, 0);
    assert_eq!(name, "parameters_2026-08-30_10-20-30.txt");
    let text = String::from_utf8(body).unwrap();
    assert_eq!(
        text,
        "GaussianBlur: 4\n\
         Canny Min: 50\n\
         Canny Max: 150\n\
         Kernel Size: 4\n\
         Original Image Path: wall.png, bridge.jpg\n",
    );

    // Entries 1..: images in input order, renamed to *_processed.png.
    let (name, body) = read_entry(&mut archive, 1);
    assert_eq!(name, "wall_processed.png");
    let decoded = image::load_from_memory(&body).unwrap().to_rgb8();
    assert_eq!(decoded, wall);

    let (name, _body) = read_entry(&mut archive, 2);
    assert_eq!(name, "bridge_processed.png");
}

#[test]
fn zero_images_yields_manifest_only_archive() {
    let manifest = ArchiveManifest::new(PipelineParams::default(), vec![]);
    let ts = datetime!(2026-01-01 00:00:00 UTC);

    let bytes = build_archive(&[], &manifest, ts).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 1);

    let (name, body) = read_entry(&mut archive, 0);
    assert_eq!(name, "parameters_2026-01-01_00-00-00.txt");
    let text = String::from_utf8(body).unwrap();
    assert!(text.ends_with("Original Image Path: \n"));
}

#[test]
fn download_filename_embeds_timestamp() {
    let ts = datetime!(2026-08-30 10:20:30 UTC);
    assert_eq!(
        archive_filename(ts).unwrap(),
        "processed_data_2026-08-30_10-20-30.zip",
    );
}
