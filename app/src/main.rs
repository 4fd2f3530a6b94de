use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};
use ridge::{Canvas, SceneConfig, generate, render_scene, triangulate};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Result of one "Generate" click
struct Scene {
    canvas: Canvas,
    points: usize,
    triangles: usize,
    area: f64,
}

fn build_scene(config: &SceneConfig) -> ridge::Result<Scene> {
    config.validate()?;
    let mut source = config.source();
    let (width, height) = (config.width as f64, config.height as f64);

    let ridge = generate(config.segments, width, height, &mut source)?;
    let triangles = triangulate(&ridge, width, height)?;
    let canvas = render_scene(
        config.width,
        config.height,
        &ridge,
        &triangles,
        &config.style(),
        &mut source,
    )?;

    Ok(Scene {
        canvas,
        points: ridge.len(),
        triangles: triangles.len(),
        area: ridge.interior_area(height),
    })
}

struct RidgeApp {
    // parameters
    width: u32,
    height: u32,
    segments: usize,
    seed: u64,
    random_seed: bool,
    outline_width: f64,
    triangle_width: f64,

    // generated texture
    ridge_texture: Option<TextureHandle>,
    // last render, kept for saving
    last_canvas: Option<Canvas>,

    // status line
    status_message: String,
}

impl RidgeApp {
    fn from_config(config: SceneConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            segments: config.segments,
            seed: config.seed.unwrap_or(2025),
            random_seed: config.seed.is_none(),
            outline_width: config.outline_width,
            triangle_width: config.triangle_width,
            ridge_texture: None,
            last_canvas: None,
            status_message: String::new(),
        }
    }

    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            width: self.width,
            height: self.height,
            segments: self.segments,
            seed: Some(self.seed),
            outline_width: self.outline_width,
            triangle_width: self.triangle_width,
            ..Default::default()
        }
    }

    fn generate(&mut self, ctx: &egui::Context) {
        if self.random_seed {
            self.seed = rand::random();
        }
        let start = Instant::now();

        match build_scene(&self.scene_config()) {
            Ok(scene) => {
                let img = scene.canvas.image();
                let size = [img.width() as usize, img.height() as usize];
                let color_image = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                self.ridge_texture =
                    Some(ctx.load_texture("ridge", color_image, egui::TextureOptions::LINEAR));

                let elapsed = start.elapsed().as_secs_f32() * 1000.0;
                self.status_message = format!(
                    "Generated in {:.2} ms (seed {})\n{} points, {} triangles, area {:.0} px²",
                    elapsed, self.seed, scene.points, scene.triangles, scene.area
                );
                info!(
                    seed = self.seed,
                    points = scene.points,
                    triangles = scene.triangles,
                    "generated ridge"
                );
                self.last_canvas = Some(scene.canvas);
            }
            Err(e) => {
                warn!(error = %e, "ridge generation failed");
                self.status_message = format!("Error: {e}");
            }
        }
        ctx.request_repaint();
    }

    fn save_png(&mut self) {
        let Some(canvas) = &self.last_canvas else {
            self.status_message = "Nothing to save yet".into();
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(format!("ridge_{}.png", self.seed))
            .save_file()
        else {
            return;
        };

        self.status_message = match canvas.save_png(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                warn!(error = %e, "saving PNG failed");
                format!("Save error: {e}")
            }
        };
    }
}

impl App for RidgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Ridge Generator");
            ui.separator();

            // Canvas size
            ui.label("Canvas");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.width).range(16..=8192).suffix(" px"));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut self.height).range(16..=8192).suffix(" px"));
            });

            ui.label("Segments");
            ui.add(egui::Slider::new(&mut self.segments, 1..=60));

            // Seed
            ui.checkbox(&mut self.random_seed, "Random seed");
            ui.add_enabled(
                !self.random_seed,
                egui::DragValue::new(&mut self.seed).speed(1.0),
            );

            ui.separator();
            ui.label("Outline Width");
            ui.add(egui::Slider::new(&mut self.outline_width, 0.0..=20.0));
            ui.label("Triangle Width");
            ui.add(egui::Slider::new(&mut self.triangle_width, 0.0..=10.0));

            ui.separator();

            if ui.button("Generate Ridge").clicked() {
                self.generate(ctx);
            }

            if ui.button("Save PNG…").clicked() {
                self.save_png();
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.ridge_texture {
                // fit the image into the panel, keeping its aspect ratio
                let available = ui.available_size();
                let tex_size = tex.size_vec2();
                let scale = (available.x / tex_size.x).min(available.y / tex_size.y);
                ui.image((tex.id(), Vec2::new(tex_size.x * scale, tex_size.y * scale)));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate Ridge” to start");
                });
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional JSON scene config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::from_json_file(&path).unwrap_or_else(|e| {
            warn!(path = %path, error = %e, "could not load config, using defaults");
            SceneConfig::default()
        }),
        None => SceneConfig::default(),
    };

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Ridge Generator",
        opts,
        Box::new(move |_cc| Ok(Box::new(RidgeApp::from_config(config)))),
    )
}
