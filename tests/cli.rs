//! End-to-end runs of the texgen binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn texgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_texgen"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn init_then_build() {
    let dir = tempdir().unwrap();

    let init = texgen(dir.path(), &["init"]);
    assert!(init.status.success(), "{}", String::from_utf8_lossy(&init.stderr));
    assert!(dir.path().join("texgen.yaml").exists());

    let build = texgen(dir.path(), &["build"]);
    assert!(build.status.success(), "{}", String::from_utf8_lossy(&build.stderr));

    for name in ["orb", "frame", "checker"] {
        let img = image::open(dir.path().join("dist").join(format!("{}.png", name)))
            .unwrap()
            .to_rgba8();
        assert_eq!(img.dimensions(), (64, 64));
    }
}

#[test]
fn build_fails_on_invalid_recipe() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bad.texture.yaml"),
        "textures:\n  - name: bad\n    shape: { kind: grid, chunk-length: 0 }\n    fill: { type: flat, inside: red, outside: blue }\n",
    )
    .unwrap();

    let build = texgen(dir.path(), &["build"]);
    assert!(!build.status.success());
    let stderr = String::from_utf8_lossy(&build.stderr);
    assert!(stderr.contains("zero-chunk"), "{}", stderr);
}

#[test]
fn split_and_replace() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sheet.texture.yaml"),
        "textures:\n  - name: sheet\n    width: 12\n    height: 8\n    shape: { kind: grid, chunk-length: 4 }\n    fill: { type: flat, inside: lime, outside: blue }\n",
    )
    .unwrap();
    assert!(texgen(dir.path(), &["build", "-q"]).status.success());

    let sheet = dir.path().join("dist/sheet.png");
    let split = texgen(
        dir.path(),
        &[
            "split",
            sheet.to_str().unwrap(),
            "--columns",
            "3",
            "--rows",
            "2",
            "--json",
            "-o",
            "tiles",
        ],
    );
    assert!(split.status.success(), "{}", String::from_utf8_lossy(&split.stderr));
    for i in 0..6 {
        assert!(dir.path().join(format!("tiles/sheet-{:02}.png", i)).exists());
    }
    assert!(dir.path().join("tiles/sheet.json").exists());

    let replace = texgen(
        dir.path(),
        &["replace", sheet.to_str().unwrap(), "-o", "red.png"],
    );
    assert!(replace.status.success(), "{}", String::from_utf8_lossy(&replace.stderr));

    let img = image::open(dir.path().join("red.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 7).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(4, 7).0, [0, 0, 255, 255]);
}

#[test]
fn palette_lists_colours_on_stdout() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("half.texture.yaml"),
        "textures:\n  - name: half\n    size: 4\n    shape: { kind: diagonal }\n    fill: { type: flat, inside: red, outside: white }\n",
    )
    .unwrap();
    assert!(texgen(dir.path(), &["build", "-q"]).status.success());

    let palette = texgen(dir.path(), &["palette", "dist/half.png"]);
    assert!(palette.status.success());
    let stdout = String::from_utf8_lossy(&palette.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("#FFFFFF"), "{}", stdout);
    assert!(lines[0].ends_with(" 10"), "{}", stdout);
    assert!(lines[1].starts_with("#FF0000"), "{}", stdout);
}
