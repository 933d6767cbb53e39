use crate::config::WindowConfig;
use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent, Overlay, View};
use crate::mode::Mode;
use eframe::egui;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn color([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

struct VideoWindow {
    view: Arc<Mutex<Option<View>>>,
    event_sender: Sender<DeviceDisplayEvent>,
    texture: Option<egui::TextureHandle>,
    repaint_interval: Duration,
    close_requested: Arc<AtomicBool>,
}

impl VideoWindow {
    fn upload_frame(&mut self, ctx: &egui::Context, view: &View) {
        let Some(frame) = &view.frame else { return };
        let size = [frame.width() as usize, frame.height() as usize];
        let image = egui::ColorImage::from_rgb(size, frame.0.as_raw());

        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::default()),
            None => {
                self.texture =
                    Some(ctx.load_texture("video", image, egui::TextureOptions::default()))
            }
        }
    }

    fn paint_overlays(painter: &egui::Painter, origin: egui::Pos2, overlays: &[Overlay]) {
        for overlay in overlays {
            match overlay {
                Overlay::Text { text, x, y, color: c } => {
                    painter.text(
                        origin + egui::vec2(*x as f32, *y as f32),
                        egui::Align2::LEFT_BOTTOM,
                        text,
                        egui::FontId::proportional(22.0),
                        color(*c),
                    );
                }
                Overlay::Rect {
                    x,
                    y,
                    width,
                    height,
                    color: c,
                } => {
                    let rect = egui::Rect::from_min_size(
                        origin + egui::vec2(*x as f32, *y as f32),
                        egui::vec2(*width as f32, *height as f32),
                    );
                    painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, color(*c)));
                }
                Overlay::Point { x, y, color: c } => {
                    painter.circle_filled(origin + egui::vec2(*x, *y), 3.0, color(*c));
                }
                Overlay::Line { from, to, color: c } => {
                    painter.line_segment(
                        [
                            origin + egui::vec2(from.0, from.1),
                            origin + egui::vec2(to.0, to.1),
                        ],
                        egui::Stroke::new(2.0, color(*c)),
                    );
                }
            }
        }
    }
}

impl eframe::App for VideoWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.view.lock().ok().and_then(|view| view.clone());

        if let Some(view) = &view {
            self.upload_frame(ctx, view);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let (Some(texture), Some(view)) = (&self.texture, &view) {
                let response = ui.image((texture.id(), texture.size_vec2()));
                Self::paint_overlays(ui.painter(), response.rect.min, &view.overlays);
            }

            if let Some(view) = &view {
                ui.label(view.status.as_str());
            }

            for mode in Mode::ALL.iter().filter(|mode| **mode != Mode::Idle) {
                if ui.button(mode.label()).clicked() {
                    let _ = self.event_sender.send(DeviceDisplayEvent::ModeSelected(*mode));
                }
            }

            if ui.button("Exit").clicked() {
                let _ = self.event_sender.send(DeviceDisplayEvent::ExitRequested);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        if self.close_requested.load(Ordering::SeqCst) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.request_repaint_after(self.repaint_interval);
    }
}

/// Sends `ExitRequested` when dropped, so the app stops however the window
/// goes away: closed, failed to open, or panicked.
struct ExitOnDrop(Sender<DeviceDisplayEvent>);

impl Drop for ExitOnDrop {
    fn drop(&mut self) {
        let _ = self.0.send(DeviceDisplayEvent::ExitRequested);
    }
}

/// The native window. Most platforms only allow the event loop on the main
/// thread, so [`GuiWindow::run`] must be called from there.
pub struct GuiWindow {
    config: WindowConfig,
    window: VideoWindow,
    exit_on_drop: ExitOnDrop,
}

impl GuiWindow {
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let GuiWindow {
            config,
            window,
            exit_on_drop,
        } = self;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.width, config.height]),
            ..Default::default()
        };

        let result = eframe::run_native(&config.title, options, Box::new(|_cc| Box::new(window)));
        drop(exit_on_drop);

        result.map_err(|e| e.to_string().into())
    }
}

pub struct DeviceDisplayGui {
    config: WindowConfig,
    repaint_interval: Duration,
    view: Arc<Mutex<Option<View>>>,
    close_requested: Arc<AtomicBool>,
    event_sender: Sender<DeviceDisplayEvent>,
    event_receiver: Mutex<Option<Receiver<DeviceDisplayEvent>>>,
}

impl DeviceDisplayGui {
    pub fn new(config: WindowConfig, repaint_interval: Duration) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            config,
            repaint_interval,
            view: Arc::new(Mutex::new(None)),
            close_requested: Arc::new(AtomicBool::new(false)),
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }

    /// A window showing whatever this display last rendered.
    pub fn window(&self) -> GuiWindow {
        GuiWindow {
            config: self.config.clone(),
            window: VideoWindow {
                view: self.view.clone(),
                event_sender: self.event_sender.clone(),
                texture: None,
                repaint_interval: self.repaint_interval,
                close_requested: self.close_requested.clone(),
            },
            exit_on_drop: ExitOnDrop(self.event_sender.clone()),
        }
    }

    /// Set it to close the window from outside, e.g. once the app has stopped.
    pub fn close_handle(&self) -> Arc<AtomicBool> {
        self.close_requested.clone()
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view.lock().map_err(|e| e.to_string())? = Some(view.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        match self.event_receiver.lock().ok().and_then(|mut r| r.take()) {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }
}
