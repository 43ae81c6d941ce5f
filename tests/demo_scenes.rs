//! Render every scene in `demos/`
//!
//! Each demo must load, render in both output modes, and produce a
//! structurally valid SVG with one path per object and material.

use std::fs;
use std::path::Path;

use curve_to_svg::{render, Scene};

#[test]
fn test_all_demo_scenes_render() {
    let demos_dir = Path::new("demos");

    if !demos_dir.exists() {
        panic!("Demos directory not found at {:?}", demos_dir);
    }

    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.extension().map_or(false, |ext| ext == "toml") {
            let scene = match Scene::from_file(&path) {
                Ok(scene) => scene,
                Err(e) => {
                    failures.push(format!("Failed to load {}: {}", path.display(), e));
                    continue;
                }
            };

            for minify in [false, true] {
                let settings = scene.settings.clone().with_minify(minify);
                match render(&scene.objects, &settings) {
                    Ok(svg) => {
                        if !svg.starts_with("<?xml") {
                            failures.push(format!("{}: missing XML declaration", path.display()));
                        }
                        if !svg.contains("<svg") || !svg.contains("</svg>") {
                            failures.push(format!("{}: missing <svg> element", path.display()));
                        }
                        if !svg.contains(r#"<g transform="scale(1 -1)""#) {
                            failures.push(format!("{}: missing flip group", path.display()));
                        }
                    }
                    Err(e) => {
                        failures.push(format!("Failed to render {}: {}", path.display(), e));
                    }
                }
            }
            tested += 1;
        }
    }

    if !failures.is_empty() {
        panic!("Demo failures:\n{}", failures.join("\n"));
    }
    assert!(tested >= 3, "Expected at least 3 demo scenes, found {}", tested);
}

#[test]
fn test_square_demo() {
    let scene = Scene::from_file(Path::new("demos/square.toml")).unwrap();
    let svg = render(&scene.objects, &scene.settings).unwrap();

    assert!(svg.contains(r#"viewBox="0 -5 6 5""#));
    assert!(svg.contains(r#"transform="translate(2 1)""#));
    assert!(svg.contains(r##"style="fill: #ff0000;""##));
    assert!(svg.contains(
        r#"d="M 0,0 C 0,0 4,0 4,0 C 4,0 4,4 4,4 C 4,4 0,4 0,4 C 0,4 0,0 0,0 Z""#
    ));
}

#[test]
fn test_ring_demo_merges_splines() {
    let scene = Scene::from_file(Path::new("demos/ring.toml")).unwrap();
    let svg = render(&scene.objects, &scene.settings).unwrap();

    assert_eq!(svg.matches("<path ").count(), 1);
    assert_eq!(svg.matches(" Z").count(), 2);
    assert!(!svg.contains('\n'));
    assert!(svg.contains(r#"viewBox="-2 -2 4 4""#));
}

#[test]
fn test_mixed_selection_demo() {
    let scene = Scene::from_file(Path::new("demos/mixed_selection.toml")).unwrap();
    let svg = render(&scene.objects, &scene.settings).unwrap();

    assert!(svg.contains(r#"id="Wave""#));
    assert_eq!(svg.matches(r#"id="Flag""#).count(), 2);
    assert!(!svg.contains("Hidden"));
    assert!(!svg.contains("Cube"));
    assert!(!svg.contains("Helix"));
    assert_eq!(svg.matches("style=").count(), 1);
    assert!(svg.contains(r#"d="M 0,0 C 0.5,0.5 1.5,-0.5 2,0 C 2.5,0.5 3.5,-0.5 4,0""#));
}
