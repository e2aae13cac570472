use assert_cmd::prelude::*;
use image::{GenericImageView, ImageBuffer, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_source(path: &Path, width: u32, height: u32) {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 23) as u8, (y * 17) as u8, ((x + y) * 11) as u8])
    });
    img.save(path).unwrap();
}

fn seamcarve() -> Command {
    Command::cargo_bin("seamcarve").unwrap()
}

#[test]
fn shrinks_and_grows_to_target() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_source(&input, 10, 8);

    seamcarve()
        .arg(&input)
        .arg(&output)
        .args(&["7", "11"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 11));
}

#[test]
fn energy_mode_is_accepted() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_source(&input, 6, 6);

    seamcarve()
        .arg(&input)
        .arg(&output)
        .args(&["5", "5", "backward"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (5, 5));
}

#[test]
fn writes_energy_map_of_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let energy = dir.path().join("energy.png");
    write_source(&input, 9, 4);

    seamcarve()
        .arg(&input)
        .arg(&output)
        .args(&["4", "4", "forward", "--energy-map"])
        .arg(&energy)
        .assert()
        .success();

    assert_eq!(image::open(&energy).unwrap().dimensions(), (9, 4));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.png");

    seamcarve()
        .arg(dir.path().join("absent.png"))
        .arg(&output)
        .args(&["3", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:").from_utf8());

    assert!(!output.exists());
}

#[test]
fn non_integer_width_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_source(&input, 4, 4);

    seamcarve()
        .arg(&input)
        .arg(&output)
        .args(&["three", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("width").from_utf8());

    assert!(!output.exists());
}

#[test]
fn degenerate_target_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_source(&input, 4, 4);

    seamcarve()
        .arg(&input)
        .arg(&output)
        .args(&["0", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("degenerate").from_utf8());

    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_source(&input, 4, 4);

    seamcarve()
        .arg(&input)
        .arg(dir.path().join("no").join("such").join("out.png"))
        .args(&["3", "3"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn too_few_arguments_fails() {
    seamcarve().arg("in.png").assert().failure().code(1);
}

#[test]
fn failed_output_leaves_no_energy_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let energy = dir.path().join("energy.png");
    write_source(&input, 5, 5);

    seamcarve()
        .arg(&input)
        .arg(dir.path().join("no").join("such").join("out.png"))
        .args(&["4", "4", "forward", "--energy-map"])
        .arg(&energy)
        .assert()
        .failure()
        .code(1);

    assert!(!energy.exists());
}
