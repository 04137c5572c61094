use clap::Parser;
use log::info;

use multitrack_demo::capture::{FrameSource, SyntheticCapture};
use multitrack_demo::region::Region;
use multitrack_demo::settings::Cli;
use multitrack_demo::systems::selection::PointerEvent;
use multitrack_demo::systems::Systems;
use multitrack_demo::PixelPoint;

pub struct Model {
    capture: SyntheticCapture,
    systems: Systems,
    texture: Option<egui::TextureHandle>,
    last_pointer: PixelPoint,
}

impl Default for Model {
    fn default() -> Self {
        let cli = Cli::parse();

        let capture = SyntheticCapture::new(cli.capture_width, cli.capture_height);
        let systems = Systems::new(&cli).expect("failed to init tracking systems");

        info!("Multitrack GUI started OK");

        Model {
            capture,
            systems,
            texture: None,
            last_pointer: (0, 0),
        }
    }
}

impl Model {
    fn region_rect(origin: egui::Pos2, region: &Region) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(region.x as f32, region.y as f32),
            egui::vec2(region.width as f32, region.height as f32),
        )
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, win_frame: &mut eframe::Frame) {
        let Some(frame) = self.capture.next_frame() else {
            win_frame.close();
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = egui::vec2(frame.width() as f32, frame.height() as f32);
            let image = egui::ColorImage {
                size: [frame.width() as usize, frame.height() as usize],
                pixels: frame
                    .pixels()
                    .iter()
                    .map(|&luma| egui::Color32::from_gray(luma))
                    .collect(),
            };
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture(
                        "capture",
                        image,
                        egui::TextureOptions::NEAREST,
                    ))
                }
            }
            let Some(texture) = &self.texture else {
                return;
            };

            let response = ui.image(texture, size).interact(egui::Sense::drag());
            let origin = response.rect.min;

            // Translate this repaint's drag interaction into pointer events
            // for the gesture interpreter.
            let mut events = Vec::new();
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = ((pos.x - origin.x) as i32, (pos.y - origin.y) as i32);
                    self.last_pointer = (x, y);
                    events.push(PointerEvent::Press { x, y });
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = ((pos.x - origin.x) as i32, (pos.y - origin.y) as i32);
                    self.last_pointer = (x, y);
                    events.push(PointerEvent::Move { x, y });
                }
            }
            if response.drag_released() {
                // The pointer may already be gone on release; the commit
                // uses the last position the drag reported.
                let (x, y) = self.last_pointer;
                events.push(PointerEvent::Release { x, y });
            }

            let tracked = self.systems.process_frame(&frame, &events);

            let painter = ui.painter_at(response.rect);
            for update in &tracked {
                let rect = Model::region_rect(origin, &update.region);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE));
                painter.text(
                    rect.left_top(),
                    egui::Align2::LEFT_BOTTOM,
                    format!("#{}", update.id),
                    egui::FontId::monospace(14.0),
                    egui::Color32::LIGHT_BLUE,
                );
            }
            if let Some(candidate) = self.systems.selection.live_candidate() {
                let rect = Model::region_rect(origin, candidate);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(3.0, egui::Color32::GREEN));
            }
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            win_frame.close();
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(33));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.systems.registry.teardown();
    }
}
