use crate::strip::strip_background;
use crate::types::BatchSummary;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    pb
}

/// Strip every target under `icons_dir`, in order. A failing file is logged
/// and counted; the rest of the batch still runs.
pub fn run_batch(icons_dir: &Path, targets: &[&str]) -> BatchSummary {
    let pb = progress_bar(targets.len());
    let mut summary = BatchSummary::default();

    for target in targets {
        let path = icons_dir.join(target);
        pb.set_message(target.to_string());
        pb.suspend(|| println!("Processing: {}", path.display()));

        match strip_background(&path) {
            Ok(report) => {
                log::debug!(
                    "{}: {}x{}, {} pixels cleared",
                    report.path.display(),
                    report.width,
                    report.height,
                    report.stripped
                );
                pb.suspend(|| println!("✓ Saved transparent: {}", path.display()));
                summary.succeeded += 1;
            }
            Err(err) => {
                pb.suspend(|| {
                    log::error!(
                        "Error processing {}: {}",
                        err.path().display(),
                        err.image_error()
                    )
                });
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    log::info!(
        "{} of {} files processed, {} failed",
        summary.succeeded,
        summary.total(),
        summary.failed
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_icon(dir: &Path, name: &str) {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 255, 255, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn bad_file_does_not_abort_batch() {
        let dir = TempDir::new().unwrap();
        write_icon(dir.path(), "a.png");
        write_icon(dir.path(), "c.png");

        let summary = run_batch(dir.path(), &["a.png", "b.png", "c.png"]);
        assert_eq!(summary, BatchSummary { succeeded: 2, failed: 1 });

        let last = image::open(dir.path().join("c.png")).unwrap().into_rgba8();
        assert_eq!(last.get_pixel(0, 0)[3], 0);
        assert_eq!(*last.get_pixel(1, 1), Rgba([0, 255, 255, 255]));
    }

    #[test]
    fn empty_batch() {
        let dir = TempDir::new().unwrap();
        let summary = run_batch(dir.path(), &[]);
        assert_eq!(summary.total(), 0);
    }
}
