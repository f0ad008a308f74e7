use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const A_CSV: &str = "\
function,optimization,parallelism,cycles
A,baseline,1,1000
A,ssr,1,500
A,baseline,2,800
A,ssr,2,320
A,baseline,4,600
A,ssr,4,200
";

const B_CSV: &str = "\
function,optimization,parallelism,cycles
B,baseline,1,900
B,frep,1,300
B,baseline,2,700
B,frep,2,175
B,baseline,4,500
B,frep,4,100
";

/// A throwaway project with results for functions `A` and `B`.
fn project(git: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if git {
        fs::create_dir(dir.path().join(".git")).unwrap();
    }
    let data = dir.path().join("plots").join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("a.csv"), A_CSV).unwrap();
    fs::write(data.join("b.csv"), B_CSV).unwrap();
    dir
}

fn speedup_plot(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("speedup-plot").unwrap();
    cmd.current_dir(cwd).env_remove("SPEEDUP_PLOT_DATA_DIR");
    cmd
}

#[test]
fn refuses_to_run_outside_project_root() {
    let dir = project(false);
    speedup_plot(dir.path())
        .args(["--savepath", "out.svg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "please run this script from the project root",
        ));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn include_names_the_chart() {
    let dir = project(true);
    speedup_plot(dir.path())
        .args(["-i", "A", "--savepath", "out.svg"])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("out.svg")).unwrap();
    assert!(svg.contains("A Speedup Plot"));
    assert!(svg.contains("ssr"));
    // B's only optimization was filtered out by the loader.
    assert!(!svg.contains("frep"));
}

#[test]
fn default_title_without_include() {
    let dir = project(true);
    speedup_plot(dir.path())
        .args(["--savepath", "out.svg"])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("out.svg")).unwrap();
    assert!(svg.contains("Speedup Plot"));
    assert!(!svg.contains("A Speedup Plot"));
    assert!(svg.contains("ssr"));
    assert!(svg.contains("frep"));
}

#[test]
fn exclude_removes_series() {
    let dir = project(true);
    speedup_plot(dir.path())
        .args(["-e", "A", "--savepath", "out.svg"])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("out.svg")).unwrap();
    assert!(svg.contains("frep"));
    assert!(!svg.contains("ssr"));
}

#[test]
fn png_is_written_relative_to_working_directory_at_300_dpi() {
    let dir = project(true);
    fs::create_dir(dir.path().join("figures")).unwrap();
    speedup_plot(dir.path())
        .args(["-i", "A", "-s", "figures/out.png"])
        .assert()
        .success();

    let path = dir.path().join("figures").join("out.png");
    let (width, height) = image::image_dimensions(&path).unwrap();
    assert!(width <= 1920 && height <= 1440, "{width}x{height}");

    let decoder = png::Decoder::new(fs::File::open(&path).unwrap());
    let reader = decoder.read_info().unwrap();
    let dims = reader.info().pixel_dims.as_ref().unwrap();
    assert_eq!(dims.xppu, 11811);
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = project(true);
    let render = || {
        speedup_plot(dir.path())
            .args(["-i", "A", "B", "--bar-labels", "--savepath", "out.svg"])
            .assert()
            .success();
        fs::read(dir.path().join("out.svg")).unwrap()
    };
    let first = render();
    let second = render();
    assert_eq!(first, second);
}

#[test]
fn data_dir_from_environment() {
    let dir = project(true);
    let other = dir.path().join("results");
    fs::create_dir(&other).unwrap();
    fs::write(
        other.join("c.csv"),
        "function,optimization,parallelism,speedup\nC,simd,8,6.5\n",
    )
    .unwrap();

    speedup_plot(dir.path())
        .env("SPEEDUP_PLOT_DATA_DIR", "results")
        .args(["--savepath", "out.svg"])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("out.svg")).unwrap();
    assert!(svg.contains("simd"));
    assert!(!svg.contains("ssr"));
}

#[test]
fn load_errors_propagate() {
    let dir = project(true);
    speedup_plot(dir.path())
        .args(["--data-dir", "missing", "--savepath", "out.svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading data directory"));
    assert!(!dir.path().join("out.svg").exists());
}
