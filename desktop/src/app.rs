use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use image::ImageReader;

use crate::model::{SelectedFile, UiMessage};
use brainscan::{extract_predictions, format_summary, Config, PredictClient, ServerReply};

const PREVIEW_MAX: u32 = 512;
const PLACEHOLDER: &str = "Select an image and press Analyze.";

pub struct UploadApp {
    base_url: String,
    selected: Option<SelectedFile>,
    preview: Option<egui::TextureHandle>,
    results: String,
    status: String,
    analyzing: bool,
    preview_inflight: bool,
    // Generation counters: only the most recently initiated selection /
    // submit is allowed to update the UI.
    select_gen: u64,
    submit_gen: u64,
    rx: Receiver<UiMessage>,
    tx: Sender<UiMessage>,
}

impl Default for UploadApp {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let base_url = Config::load()
            .unwrap_or_default()
            .effective_base_url();
        Self {
            base_url,
            selected: None,
            preview: None,
            results: PLACEHOLDER.to_string(),
            status: String::new(),
            analyzing: false,
            preview_inflight: false,
            select_gen: 0,
            submit_gen: 0,
            rx,
            tx,
        }
    }
}

impl UploadApp {
    fn select_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "webp", "bmp"])
            .pick_file()
        else {
            // Dialog cancelled: no state change.
            return;
        };

        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string();
        self.selected = Some(SelectedFile {
            path: path.clone(),
            name,
        });
        self.select_gen += 1;
        // Dropping the old handle releases the previous preview texture.
        self.preview = None;
        self.preview_inflight = true;
        self.status.clear();

        let sender = self.tx.clone();
        let generation = self.select_gen;
        std::thread::spawn(move || {
            let image = ImageReader::open(&path).ok().and_then(|r| r.decode().ok());
            let msg = match image {
                Some(image) => {
                    let preview = image.thumbnail(PREVIEW_MAX, PREVIEW_MAX);
                    UiMessage::PreviewReady {
                        generation,
                        size: [preview.width() as usize, preview.height() as usize],
                        pixels: preview.to_rgba8().into_raw(),
                    }
                }
                None => UiMessage::PreviewReady {
                    generation,
                    size: [0, 0],
                    pixels: Vec::new(),
                },
            };
            let _ = sender.send(msg);
        });
    }

    fn submit(&mut self) {
        let Some(selected) = &self.selected else {
            self.status = "Choose a file".to_string();
            return;
        };

        // Instant feedback, before any network activity.
        self.results = "Analyzing...".to_string();
        self.analyzing = true;
        self.submit_gen += 1;

        let generation = self.submit_gen;
        let path = selected.path.clone();
        let base_url = self.base_url.clone();
        let sender = self.tx.clone();

        std::thread::spawn(move || {
            let text = run_predict(&base_url, &path);
            let _ = sender.send(UiMessage::PredictDone { generation, text });
        });
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::PreviewReady {
                    generation,
                    size,
                    pixels,
                } => {
                    if generation != self.select_gen {
                        // A newer selection superseded this decode.
                        continue;
                    }
                    self.preview_inflight = false;
                    if size[0] == 0 || size[1] == 0 {
                        self.status = "Preview unavailable".to_string();
                        continue;
                    }
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                    self.preview =
                        Some(ctx.load_texture("preview", color_image, egui::TextureOptions::default()));
                }
                UiMessage::PredictDone { generation, text } => {
                    if generation != self.submit_gen {
                        // Stale reply; a newer submit has been initiated.
                        continue;
                    }
                    self.results = text;
                    self.analyzing = false;
                }
            }
        }
    }
}

impl eframe::App for UploadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.analyzing || self.preview_inflight {
            ctx.request_repaint();
        }
        self.poll_messages(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Choose Image...").clicked() {
                    self.select_image();
                }
                if ui.button("Analyze").clicked() {
                    self.submit();
                }
                if let Some(selected) = &self.selected {
                    ui.label(RichText::new(&selected.name).color(Color32::from_gray(200)));
                }
                ui.separator();
                ui.label(RichText::new(&self.base_url).color(Color32::from_gray(120)).size(11.0));
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_rgb(246, 196, 69)));
                }
            });
        });

        egui::SidePanel::left("preview")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Preview");
                ui.separator();
                match &self.preview {
                    Some(texture) => {
                        let size = ui.available_size();
                        ui.add(egui::Image::new(texture).fit_to_exact_size(size));
                    }
                    None if self.preview_inflight => {
                        ui.label("Loading...");
                    }
                    None => {
                        ui.label("No image selected");
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Results");
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(RichText::new(&self.results).monospace());
            });
        });
    }
}

/// Blocking wrapper around the async client for use on a worker thread.
/// All outcomes, including errors, become the display text.
fn run_predict(base_url: &str, path: &Path) -> String {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => return format!("Runtime error: {err}"),
    };

    let client = PredictClient::new(base_url);
    match runtime.block_on(client.predict(path)) {
        Ok(reply) => {
            let mut text = reply.display_text();
            if let ServerReply::Json(value) = &reply {
                let predictions = extract_predictions(value);
                if !predictions.is_empty() {
                    text.push_str("\n\nRanked predictions:\n");
                    text.push_str(&format_summary(&predictions));
                }
            }
            text
        }
        Err(err) => {
            eprintln!("predict failed: {err}");
            err.to_string()
        }
    }
}
