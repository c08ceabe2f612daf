mod app;
mod model;

use app::UploadApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Brain Tumor Scan Viewer",
        options,
        Box::new(|_cc| Box::new(UploadApp::default())),
    )
}
